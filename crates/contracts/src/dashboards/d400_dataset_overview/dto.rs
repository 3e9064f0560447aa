use serde::{Deserialize, Serialize};

use crate::domain::order_record::OrderRecord;

pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const MAX_PAGE_SIZE: usize = 500;

/// Query for one page of the full table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsPageRequest {
    /// 0-indexed
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for RecordsPageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsPage {
    pub rows: Vec<OrderRecord>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Human-readable description of one dataset column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub column: String,
    pub description: String,
}
