//! Column-name lists.

use std::fmt;

/// A convenience wrapper for table columns.
///
/// Renders as `a, b, c` and converts into [`Value::Raw`](crate::Value::Raw), so
/// debug builds keep it unquoted.
///
/// # Example
/// ```ignore
/// use sqlfrag::Columns;
///
/// let cols = Columns::from(["id", "name"]);
/// assert_eq!(cols.to_string(), "id, name");
/// assert_eq!(cols.prefixed("u."), "u.id, u.name");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns(Vec<String>);

impl Columns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column.
    pub fn push(&mut self, column: impl Into<String>) -> &mut Self {
        self.0.push(column.into());
        self
    }

    /// Same as `to_string()` but prefixes every column with `prefix`.
    pub fn prefixed(&self, prefix: &str) -> String {
        let mut out = String::new();
        for (i, col) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(prefix);
            out.push_str(col);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefixed(""))
    }
}

impl<S: Into<String>> FromIterator<S> for Columns {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> From<Vec<S>> for Columns {
    fn from(v: Vec<S>) -> Self {
        v.into_iter().collect()
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Columns {
    fn from(v: [S; N]) -> Self {
        v.into_iter().collect()
    }
}
