//! Attribute value type with total ordering.

use std::cmp::Ordering;
use std::fmt;

/// One attribute value from a dBASE record.
///
/// Null and missing values are normalized to `Text("")` at ingest, so every
/// value a later stage sees is one of these two variants. Ordering is total:
/// numbers compare numerically (via `total_cmp`) and sort before text, text
/// compares lexicographically. This keeps key-tuple sorting deterministic
/// even for columns with mixed content.
#[derive(Debug, Clone)]
pub enum AttrValue {
    Text(String),
    Number(f64),
}

impl AttrValue {
    /// The empty-string sentinel standing in for null/missing values.
    pub fn empty() -> Self {
        AttrValue::Text(String::new())
    }

    pub fn text(s: impl Into<String>) -> Self {
        AttrValue::Text(s.into())
    }
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AttrValue {}

impl PartialOrd for AttrValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AttrValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (AttrValue::Number(a), AttrValue::Number(b)) => a.total_cmp(b),
            (AttrValue::Text(a), AttrValue::Text(b)) => a.cmp(b),
            (AttrValue::Number(_), AttrValue::Text(_)) => Ordering::Less,
            (AttrValue::Text(_), AttrValue::Number(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => write!(f, "{}", s),
            // Whole numbers print without a trailing ".0" so spec-file cells
            // match what the source data looked like.
            AttrValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            AttrValue::Number(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_sort_numerically() {
        let mut values = vec![
            AttrValue::Number(10.0),
            AttrValue::Number(2.0),
            AttrValue::Number(-1.5),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                AttrValue::Number(-1.5),
                AttrValue::Number(2.0),
                AttrValue::Number(10.0),
            ]
        );
    }

    #[test]
    fn test_numbers_sort_before_text() {
        let mut values = vec![AttrValue::text("A"), AttrValue::Number(99.0)];
        values.sort();
        assert_eq!(values[0], AttrValue::Number(99.0));
    }

    #[test]
    fn test_display_trims_whole_numbers() {
        assert_eq!(AttrValue::Number(12.0).to_string(), "12");
        assert_eq!(AttrValue::Number(2.5).to_string(), "2.5");
        assert_eq!(AttrValue::text("R-1").to_string(), "R-1");
    }

    #[test]
    fn test_empty_sentinel() {
        assert_eq!(AttrValue::empty(), AttrValue::text(""));
        assert_ne!(AttrValue::empty(), AttrValue::text("x"));
    }
}
