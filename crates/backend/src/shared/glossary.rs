use contracts::dashboards::d400_dataset_overview::GlossaryEntry;
use contracts::domain::order_record::OrderRecord;
use once_cell::sync::OnceCell;
use serde::Deserialize;

const GLOSSARY_TOML: &str = include_str!("../../assets/glossary.toml");

#[derive(Debug, Deserialize)]
struct GlossaryFile {
    columns: Vec<GlossaryEntry>,
}

static GLOSSARY: OnceCell<Vec<GlossaryEntry>> = OnceCell::new();

fn parse_glossary(text: &str) -> anyhow::Result<Vec<GlossaryEntry>> {
    let file: GlossaryFile = toml::from_str(text)?;
    anyhow::ensure!(
        file.columns.len() == OrderRecord::COLUMNS.len(),
        "glossary describes {} columns, the dataset has {}",
        file.columns.len(),
        OrderRecord::COLUMNS.len()
    );
    Ok(file.columns)
}

/// Column descriptions for the dataset, in schema order.
///
/// Parsed on first use; startup calls this once so a broken glossary stops the server.
pub fn glossary() -> anyhow::Result<&'static [GlossaryEntry]> {
    GLOSSARY
        .get_or_try_init(|| parse_glossary(GLOSSARY_TOML))
        .map(Vec::as_slice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glossary_matches_schema_order() {
        let entries = parse_glossary(GLOSSARY_TOML).unwrap();
        let columns: Vec<&str> = entries.iter().map(|e| e.column.as_str()).collect();
        assert_eq!(columns, OrderRecord::COLUMNS.to_vec());
        assert!(entries.iter().all(|e| !e.description.is_empty()));
    }

    #[test]
    fn test_glossary_is_cached() {
        let entries = glossary().unwrap();
        assert_eq!(entries.len(), 18);
        assert_eq!(entries[11].column, "total_price");
        assert!(std::ptr::eq(entries, glossary().unwrap()));
    }

    #[test]
    fn test_broken_glossary_is_an_error() {
        assert!(parse_glossary("columns = 3").is_err());
        let short = "[[columns]]\ncolumn = \"order_id\"\ndescription = \"Order id\"\n";
        assert!(parse_glossary(short).is_err());
    }
}
