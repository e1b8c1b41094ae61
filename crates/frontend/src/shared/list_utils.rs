//! List helpers: column sorting and sort indicators.

use std::cmp::Ordering;

/// Types that can be compared by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort in place by the given field.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Arrow glyph for a sortable column header; empty for inactive columns.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field != field {
        ""
    } else if ascending {
        " ▲"
    } else {
        " ▼"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        amount: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "amount" => self
                    .amount
                    .partial_cmp(&other.amount)
                    .unwrap_or(Ordering::Equal),
                _ => self.name.cmp(other.name),
            }
        }
    }

    #[test]
    fn sorts_ascending_and_descending() {
        let mut rows = vec![
            Row { name: "b", amount: 2.0 },
            Row { name: "a", amount: 3.0 },
            Row { name: "c", amount: 1.0 },
        ];

        sort_list(&mut rows, "amount", true);
        assert_eq!(rows.iter().map(|r| r.name).collect::<Vec<_>>(), ["c", "b", "a"]);

        sort_list(&mut rows, "name", false);
        assert_eq!(rows.iter().map(|r| r.name).collect::<Vec<_>>(), ["c", "b", "a"]);
    }

    #[test]
    fn indicator_only_marks_the_active_column() {
        assert_eq!(get_sort_indicator("date", "amount", true), "");
        assert_eq!(get_sort_indicator("date", "date", true), " ▲");
        assert_eq!(get_sort_indicator("date", "date", false), " ▼");
    }
}
