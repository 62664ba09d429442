//! Cell display values

use std::fmt;

/// The displayed value of a cell: text or a number
///
/// Blank cells display as empty text; [`CellValue::empty`] is that value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Text content (including the empty string for blank cells)
    Text(String),
    /// Numeric content
    Number(f64),
}

impl CellValue {
    /// The value of a blank or absent cell: empty text
    pub fn empty() -> Self {
        CellValue::Text(String::new())
    }

    /// True for empty text, the value shared by absent and blank cells
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Text(t) if t.is_empty())
    }

    /// Numeric view of the value
    ///
    /// Numbers pass through; text is trimmed and parsed, yielding `None`
    /// when it does not denote a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(t) => t.trim().parse().ok(),
        }
    }

    /// The value as display text
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::empty()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(t) => write!(f, "{}", t),
            CellValue::Number(n) => {
                // Format whole numbers without decimal point
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}
