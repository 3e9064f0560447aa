use chrono::NaiveDate;
use contracts::domain::order_record::OrderRecord;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};

static DATASET: OnceCell<Dataset> = OnceCell::new();

/// Reasons the order table could not be loaded. All of them abort startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("dataset file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read dataset file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing expected columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("row {row}: invalid value {value:?} in column '{column}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// The order table, immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<OrderRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest and latest order date, `None` for an empty table
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        date_bounds(&self.records)
    }
}

pub fn date_bounds(records: &[OrderRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let min = records.iter().map(|r| r.order_date).min()?;
    let max = records.iter().map(|r| r.order_date).max()?;
    Some((min, max))
}

/// Load the dataset from `path` and keep it for the lifetime of the process.
pub fn initialize_dataset(path: &Path) -> anyhow::Result<()> {
    let dataset = load_dataset(path)?;

    match dataset.date_bounds() {
        Some((min, max)) => tracing::info!(
            "Loaded {} order rows from {} ({} .. {})",
            dataset.len(),
            path.display(),
            min,
            max
        ),
        None => tracing::warn!("Dataset {} contains no rows", path.display()),
    }

    DATASET
        .set(dataset)
        .map_err(|_| anyhow::anyhow!("dataset has already been initialized"))?;
    Ok(())
}

/// The loaded dataset, `None` before [`initialize_dataset`] succeeded.
pub fn get_dataset() -> Option<&'static Dataset> {
    DATASET.get()
}

pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut text = String::new();
    std::io::BufReader::new(file)
        .read_to_string(&mut text)
        .map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

    parse_dataset(&text)
}

/// Parse CSV text into a dataset.
///
/// Columns are matched by header name; extra columns (such as the leading
/// row index written by dataframe exports) are ignored.
pub fn parse_dataset(csv_text: &str) -> Result<Dataset, LoadError> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();

    let mut positions = [0usize; 18];
    let mut missing = Vec::new();
    for (slot, column) in positions.iter_mut().zip(OrderRecord::COLUMNS) {
        match headers.iter().position(|h| h == column) {
            Some(i) => *slot = i,
            None => missing.push(column.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns { columns: missing });
    }

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = RowReader {
            row: idx + 1,
            record: &record,
            positions: &positions,
        };
        records.push(row.to_order_record()?);
    }

    Ok(Dataset::from_records(records))
}

/// Typed access to the cells of one CSV row
struct RowReader<'a> {
    row: usize,
    record: &'a csv::StringRecord,
    positions: &'a [usize; 18],
}

impl RowReader<'_> {
    fn cell(&self, column: usize) -> &str {
        self.record.get(self.positions[column]).unwrap_or("")
    }

    fn invalid(&self, column: usize) -> LoadError {
        LoadError::InvalidValue {
            row: self.row,
            column: OrderRecord::COLUMNS[column],
            value: self.cell(column).to_string(),
        }
    }

    fn text(&self, column: usize) -> String {
        self.cell(column).to_string()
    }

    fn date(&self, column: usize) -> Result<NaiveDate, LoadError> {
        parse_date(self.cell(column)).ok_or_else(|| self.invalid(column))
    }

    fn int(&self, column: usize) -> Result<i64, LoadError> {
        parse_int(self.cell(column)).ok_or_else(|| self.invalid(column))
    }

    fn unsigned(&self, column: usize) -> Result<u32, LoadError> {
        parse_int(self.cell(column))
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| self.invalid(column))
    }

    fn float(&self, column: usize) -> Result<f64, LoadError> {
        self.cell(column)
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.invalid(column))
    }

    fn to_order_record(&self) -> Result<OrderRecord, LoadError> {
        Ok(OrderRecord {
            order_id: self.int(0)?,
            order_date: self.date(1)?,
            delivery_date: self.date(2)?,
            customer_name: self.text(3),
            gender: self.text(4),
            age: self.unsigned(5)?,
            city: self.text(6),
            state: self.text(7),
            product_id: self.int(8)?,
            price_per_unit: self.float(9)?,
            quantity: self.unsigned(10)?,
            total_price: self.float(11)?,
            product_type: self.text(12),
            product_name: self.text(13),
            size: self.text(14),
            colour: self.text(15),
            stock: self.int(16)?,
            delivery_duration: self.int(17)?,
        })
    }
}

/// Parses `YYYY-MM-DD`, ignoring a trailing time component.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = match value.find(|c: char| c == ' ' || c == 'T') {
        Some(i) => &value[..i],
        None => value,
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parses an integer, accepting float renderings such as `3.0`.
fn parse_int(value: &str) -> Option<i64> {
    if let Ok(v) = value.parse::<i64>() {
        return Some(v);
    }
    let v = value.parse::<f64>().ok()?;
    if v.is_finite() && v.fract() == 0.0 {
        Some(v as i64)
    } else {
        None
    }
}

/// Shared three-order table for handler and router tests; installed once per test binary.
#[cfg(test)]
pub(crate) fn install_test_dataset() -> &'static Dataset {
    const CSV: &str = "order_id,order_date,delivery_date,customer_name,gender,age,city,state,product_id,price_per_unit,quantity,total_price,product_type,product_name,size,colour,stock,delivery_duration\n\
        1,2024-01-01,2024-01-05,Ann Lee,Female,31,Perth,Western Australia,10,5.0,2,10.0,Shirt,Oxford Cloth,M,blue,40,4\n\
        2,2024-01-02,2024-01-04,Bob Ray,Male,45,Sydney,New South Wales,12,2.5,2,5.0,Trousers,Chinos,S,green,7,2\n\
        3,2024-01-03,2024-01-06,Cy Moe,Male,28,Hobart,Tasmania,11,20.0,1,20.0,Jacket,Bomber,L,black,12,3\n";

    DATASET.get_or_init(|| parse_dataset(CSV).expect("test dataset parses"))
}
