use serde::{Deserialize, Serialize};

/// How a metric value is rendered on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { symbol: String },
    Number { decimals: u8 },
    Integer,
}

/// Placeholder shown for a value that could not be computed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Formats an integer with comma thousands separators.
///
/// ```
/// use contracts::shared::format::format_thousands;
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// assert_eq!(format_thousands(-1000), "-1,000");
/// ```
pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Formats a money amount as `$1,234.56`.
pub fn format_currency(val: f64, symbol: &str) -> String {
    let cents = (val.abs() * 100.0).round() as i64;
    let sign = if val < 0.0 && cents != 0 { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        format_thousands(cents / 100),
        cents % 100
    )
}

pub fn format_value(val: Option<f64>, fmt: &ValueFormat) -> String {
    let Some(val) = val else {
        return NOT_AVAILABLE.to_string();
    };
    match fmt {
        ValueFormat::Money { symbol } => format_currency(val, symbol),
        ValueFormat::Number { decimals } => {
            format!("{:.prec$}", val, prec = *decimals as usize)
        }
        ValueFormat::Integer => format_thousands(val.round() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(42), "42");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567890), "1,234,567,890");
        assert_eq!(format_thousands(-42), "-42");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5, "$"), "$1,234.50");
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(0.005, "$"), "$0.01");
        assert_eq!(format_currency(-12.0, "$"), "-$12.00");
    }

    #[test]
    fn test_format_value() {
        let money = ValueFormat::Money {
            symbol: "$".to_string(),
        };
        assert_eq!(format_value(Some(99.999), &money), "$100.00");
        assert_eq!(format_value(None, &money), "N/A");
        assert_eq!(
            format_value(Some(2.456), &ValueFormat::Number { decimals: 2 }),
            "2.46"
        );
        assert_eq!(format_value(Some(12345.0), &ValueFormat::Integer), "12,345");
    }
}
