use contracts::dashboards::d400_dataset_overview::{
    GlossaryEntry, RecordsPage, RecordsPageRequest, MAX_PAGE_SIZE,
};
use contracts::domain::order_record::OrderRecord;

use crate::shared::glossary;

/// One page of the full table, in file order.
///
/// A page past the end is clamped to the last page and echoed back clamped.
pub fn get_records_page(records: &[OrderRecord], request: RecordsPageRequest) -> RecordsPage {
    let page_size = request.page_size.clamp(1, MAX_PAGE_SIZE);
    let total_count = records.len();
    let total_pages = total_count.div_ceil(page_size);
    let page = request.page.min(total_pages.saturating_sub(1));

    let rows = records
        .iter()
        .skip(page * page_size)
        .take(page_size)
        .cloned()
        .collect();

    RecordsPage {
        rows,
        total_count,
        page,
        page_size,
        total_pages,
    }
}

pub fn get_glossary() -> anyhow::Result<Vec<GlossaryEntry>> {
    Ok(glossary::glossary()?.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::dataset::parse_dataset;

    fn table(rows: usize) -> Vec<OrderRecord> {
        let mut csv = OrderRecord::COLUMNS.join(",");
        csv.push('\n');
        for i in 0..rows {
            csv.push_str(&format!(
                "{i},2024-01-01,2024-01-03,Customer {i},Male,40,Sydney,New South Wales,5,3.0,1,3.0,Shirt,Polo,L,white,9,2\n"
            ));
        }
        parse_dataset(&csv).unwrap().records().to_vec()
    }

    #[test]
    fn test_pages() {
        let records = table(250);
        let page = get_records_page(&records, RecordsPageRequest { page: 2, page_size: 100 });
        assert_eq!(page.total_count, 250);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.rows.len(), 50);
        assert_eq!(page.rows[0].order_id, 200);
    }

    #[test]
    fn test_page_past_end_is_clamped() {
        let records = table(250);
        let page = get_records_page(&records, RecordsPageRequest { page: 5, page_size: 100 });
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.rows.len(), 50);

        let page = get_records_page(&records, RecordsPageRequest { page: usize::MAX, page_size: 100 });
        assert_eq!(page.page, 2);
        assert_eq!(page.rows[0].order_id, 200);
    }

    #[test]
    fn test_empty_table_has_page_zero() {
        let page = get_records_page(&[], RecordsPageRequest { page: 3, page_size: 100 });
        assert_eq!(page.page, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn test_page_size_is_clamped() {
        let records = table(3);
        let page = get_records_page(&records, RecordsPageRequest { page: 0, page_size: 0 });
        assert_eq!(page.page_size, 1);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.total_pages, 3);

        let page = get_records_page(&records, RecordsPageRequest { page: 0, page_size: 10_000 });
        assert_eq!(page.page_size, MAX_PAGE_SIZE);
        assert_eq!(page.rows.len(), 3);
    }

    #[test]
    fn test_glossary_has_every_column() {
        assert_eq!(get_glossary().unwrap().len(), OrderRecord::COLUMNS.len());
    }
}
