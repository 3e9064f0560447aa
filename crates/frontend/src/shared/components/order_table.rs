use contracts::domain::order_record::OrderRecord;
use leptos::prelude::*;

/// Columns rendered right-aligned
const NUMERIC_COLUMNS: [&str; 8] = [
    "order_id",
    "age",
    "product_id",
    "price_per_unit",
    "quantity",
    "total_price",
    "stock",
    "delivery_duration",
];

/// Read-only table of order rows with all dataset columns
#[component]
pub fn OrderTable(
    #[prop(into)] rows: Signal<Vec<OrderRecord>>,
    /// Row number of the first row, for paged tables
    #[prop(into, optional)]
    offset: Signal<usize>,
) -> impl IntoView {
    let header = OrderRecord::COLUMNS
        .iter()
        .map(|c| {
            let class = cell_class(c);
            view! { <th class=class>{*c}</th> }
        })
        .collect_view();

    let body = move || {
        let start = offset.get();
        rows.get()
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let cells = row
                    .to_cells()
                    .into_iter()
                    .zip(OrderRecord::COLUMNS)
                    .map(|(value, column)| view! { <td class=cell_class(column)>{value}</td> })
                    .collect_view();
                view! {
                    <tr>
                        <td class="table__cell table__cell--index">{start + i}</td>
                        {cells}
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div class="table-wrapper">
            <table class="table">
                <thead>
                    <tr>
                        <th class="table__cell table__cell--index"></th>
                        {header}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            {move || rows.with(|r| r.is_empty()).then(|| view! {
                <div class="table__empty">"No rows match the selected filters"</div>
            })}
        </div>
    }
}

fn cell_class(column: &str) -> &'static str {
    if NUMERIC_COLUMNS.contains(&column) {
        "table__cell table__cell--number"
    } else {
        "table__cell"
    }
}
