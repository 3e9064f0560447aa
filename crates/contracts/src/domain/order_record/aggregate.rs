use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Order Record
// ============================================================================

/// One product line within a customer order.
///
/// Several records share an `order_id` when a checkout contains more than
/// one product. `total_price` and `delivery_duration` arrive pre-computed in
/// the source file and are taken as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: i64,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub customer_name: String,
    pub gender: String,
    pub age: u32,
    pub city: String,
    pub state: String,
    pub product_id: i64,
    pub price_per_unit: f64,
    pub quantity: u32,
    pub total_price: f64,
    pub product_type: String,
    pub product_name: String,
    pub size: String,
    pub colour: String,
    pub stock: i64,
    /// Days between `order_date` and `delivery_date`
    pub delivery_duration: i64,
}

impl OrderRecord {
    /// Column names of the source file, in schema order.
    pub const COLUMNS: [&'static str; 18] = [
        "order_id",
        "order_date",
        "delivery_date",
        "customer_name",
        "gender",
        "age",
        "city",
        "state",
        "product_id",
        "price_per_unit",
        "quantity",
        "total_price",
        "product_type",
        "product_name",
        "size",
        "colour",
        "stock",
        "delivery_duration",
    ];

    /// Cell values rendered as text, in `COLUMNS` order.
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.order_id.to_string(),
            self.order_date.format("%Y-%m-%d").to_string(),
            self.delivery_date.format("%Y-%m-%d").to_string(),
            self.customer_name.clone(),
            self.gender.clone(),
            self.age.to_string(),
            self.city.clone(),
            self.state.clone(),
            self.product_id.to_string(),
            self.price_per_unit.to_string(),
            self.quantity.to_string(),
            self.total_price.to_string(),
            self.product_type.clone(),
            self.product_name.clone(),
            self.size.clone(),
            self.colour.clone(),
            self.stock.to_string(),
            self.delivery_duration.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_follow_column_order() {
        let record = OrderRecord {
            order_id: 7,
            order_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            delivery_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            customer_name: "Ann Lee".to_string(),
            gender: "Female".to_string(),
            age: 31,
            city: "Perth".to_string(),
            state: "Western Australia".to_string(),
            product_id: 12,
            price_per_unit: 19.5,
            quantity: 2,
            total_price: 39.0,
            product_type: "Shirt".to_string(),
            product_name: "Oxford Cloth".to_string(),
            size: "M".to_string(),
            colour: "blue".to_string(),
            stock: 40,
            delivery_duration: 4,
        };

        let cells = record.to_cells();
        assert_eq!(cells.len(), OrderRecord::COLUMNS.len());
        assert_eq!(cells[1], "2024-03-01");
        assert_eq!(cells[7], "Western Australia");
        // prices are shown as stored, without rounding
        assert_eq!(cells[9], "19.5");
        assert_eq!(cells[11], "39");
        assert_eq!(cells[17], "4");
    }
}
