//! Sorting
//!
//! Header-click sort cycling and a stable comparator over raw row values.

use crate::domain::Row;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Next sort after clicking the header of `key`.
///
/// Cycles unsorted → ascending → descending → unsorted. Clicking a
/// different column starts it at ascending.
pub fn next_sort(current: Option<&SortSpec>, key: &str) -> Option<SortSpec> {
    match current {
        Some(spec) if spec.key == key => match spec.direction {
            SortDirection::Ascending => Some(SortSpec::desc(key)),
            SortDirection::Descending => None,
        },
        _ => Some(SortSpec::asc(key)),
    }
}

/// Stable in-place sort of `rows` by the raw value of `spec.key`.
///
/// Rows missing the field sort as empty values.
pub fn sort_rows<R: Row>(rows: &mut [&R], spec: &SortSpec) {
    let mut keyed: Vec<_> = rows
        .iter()
        .map(|row| (row.field(&spec.key).unwrap_or_default(), *row))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.compare(b);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    for (slot, (_, row)) in rows.iter_mut().zip(keyed) {
        *slot = row;
    }
}

/// Whether `rows` are already ordered by `spec` (ties allowed)
pub fn is_sorted_by<R: Row>(rows: &[&R], spec: &SortSpec) -> bool {
    rows.windows(2).all(|pair| {
        let a = pair[0].field(&spec.key).unwrap_or_default();
        let b = pair[1].field(&spec.key).unwrap_or_default();
        let ordering = a.compare(&b);
        match spec.direction {
            SortDirection::Ascending => ordering != Ordering::Greater,
            SortDirection::Descending => ordering != Ordering::Less,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DynamicRow;

    fn rows() -> Vec<DynamicRow> {
        vec![
            DynamicRow::new(1).with("grade", 10).with("joined", "2021-03-01"),
            DynamicRow::new(2).with("grade", 9).with("joined", "2019-11-15"),
            DynamicRow::new(3).with("grade", 10).with("joined", "2020-01-20"),
            DynamicRow::new(4).with("grade", 12).with("joined", "2022-07-04"),
        ]
    }

    fn ids(rows: &[&DynamicRow]) -> Vec<i64> {
        rows.iter().filter_map(|r| r.id().as_number()).collect()
    }

    #[test]
    fn header_clicks_cycle_through_directions() {
        let asc = next_sort(None, "grade");
        assert_eq!(asc, Some(SortSpec::asc("grade")));
        let desc = next_sort(asc.as_ref(), "grade");
        assert_eq!(desc, Some(SortSpec::desc("grade")));
        assert_eq!(next_sort(desc.as_ref(), "grade"), None);
        assert_eq!(next_sort(desc.as_ref(), "joined"), Some(SortSpec::asc("joined")));
    }

    #[test]
    fn numeric_sort_is_stable_for_ties() {
        let data = rows();
        let mut view: Vec<&DynamicRow> = data.iter().collect();
        sort_rows(&mut view, &SortSpec::asc("grade"));
        assert_eq!(ids(&view), vec![2, 1, 3, 4]);

        sort_rows(&mut view, &SortSpec::desc("grade"));
        assert_eq!(ids(&view), vec![4, 1, 3, 2]);
    }

    #[test]
    fn date_strings_sort_chronologically() {
        let data = rows();
        let mut view: Vec<&DynamicRow> = data.iter().collect();
        sort_rows(&mut view, &SortSpec::asc("joined"));
        assert_eq!(ids(&view), vec![2, 3, 1, 4]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let data = rows();
        for spec in [SortSpec::asc("grade"), SortSpec::desc("grade"), SortSpec::asc("joined")] {
            let mut once: Vec<&DynamicRow> = data.iter().collect();
            sort_rows(&mut once, &spec);
            assert!(is_sorted_by(&once, &spec));

            let mut twice = once.clone();
            sort_rows(&mut twice, &spec);
            assert_eq!(ids(&once), ids(&twice));
        }
    }

    #[test]
    fn mixed_value_columns_sort_without_cycles() {
        let data: Vec<DynamicRow> = (0..200_i64)
            .map(|i| {
                let row = DynamicRow::new(i);
                match i % 5 {
                    0 => row.with("v", (i * 37) % 101),
                    1 => row.with("v", ((i * 53) % 97).to_string()),
                    2 => row.with("v", format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1)),
                    3 => row.with("v", i % 3 == 0),
                    _ => row,
                }
            })
            .collect();

        for spec in [SortSpec::asc("v"), SortSpec::desc("v")] {
            let mut once: Vec<&DynamicRow> = data.iter().collect();
            sort_rows(&mut once, &spec);
            assert!(is_sorted_by(&once, &spec));

            let mut twice = once.clone();
            sort_rows(&mut twice, &spec);
            assert_eq!(ids(&once), ids(&twice));
        }
    }
}
