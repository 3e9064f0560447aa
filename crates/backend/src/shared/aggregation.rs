//! Group-by helpers over order rows.
//!
//! Groups keep the order in which their key was first encountered, so a
//! stable sort on the aggregate leaves ties in encounter order.

use contracts::dashboards::d401_kpi_dashboard::CategoryValue;
use std::collections::HashMap;

/// Sum `value` per `key`, groups in first-encounter order.
pub fn group_sum<'a, T, K, V>(rows: impl IntoIterator<Item = &'a T>, key: K, value: V) -> Vec<CategoryValue>
where
    T: 'a,
    K: Fn(&'a T) -> &'a str,
    V: Fn(&'a T) -> f64,
{
    let mut groups: Vec<CategoryValue> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for row in rows {
        let label = key(row);
        let slot = *index.entry(label).or_insert_with(|| {
            groups.push(CategoryValue {
                label: label.to_string(),
                value: 0.0,
            });
            groups.len() - 1
        });
        groups[slot].value += value(row);
    }

    groups
}

/// Row count per `key`, groups in first-encounter order.
pub fn group_count<'a, T, K>(rows: impl IntoIterator<Item = &'a T>, key: K) -> Vec<CategoryValue>
where
    T: 'a,
    K: Fn(&'a T) -> &'a str,
{
    group_sum(rows, key, |_| 1.0)
}

/// Stable descending sort by value, truncated to `limit` rows.
pub fn top_n(mut groups: Vec<CategoryValue>, limit: usize) -> Vec<CategoryValue> {
    groups.sort_by(|a, b| b.value.total_cmp(&a.value));
    groups.truncate(limit);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        amount: f64,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "b", amount: 5.0 },
            Row { name: "a", amount: 10.0 },
            Row { name: "c", amount: 1.0 },
            Row { name: "b", amount: 5.0 },
        ]
    }

    #[test]
    fn test_group_sum_keeps_encounter_order() {
        let data = rows();
        let groups = group_sum(&data, |r| r.name, |r| r.amount);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
        assert_eq!(groups[0].value, 10.0);
    }

    #[test]
    fn test_top_n_breaks_ties_by_encounter() {
        let data = rows();
        let ranked = top_n(group_sum(&data, |r| r.name, |r| r.amount), 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].label, "b");
        assert_eq!(ranked[1].label, "a");
    }

    #[test]
    fn test_group_count() {
        let data = rows();
        let counts = top_n(group_count(&data, |r| r.name), 10);
        assert_eq!(counts[0].label, "b");
        assert_eq!(counts[0].value, 2.0);
        assert_eq!(counts.len(), 3);
    }
}
