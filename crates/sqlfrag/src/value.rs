//! Bindable values.
//!
//! [`Value`] is the closed set of things a fragment can carry. Verbs inspect the
//! variant to decide how to render it:
//!
//! - `%s` writes the textual representation
//! - `%d` requires a numeric variant
//! - `%+`/`%#` require [`Value::List`] (of lists, for `#`)
//!
//! # Example
//! ```ignore
//! use sqlfrag::Value;
//!
//! let ids = Value::from(vec![1, 2, 3]);
//! assert!(ids.as_list().is_some());
//! ```

use crate::columns::Columns;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::borrow::Cow;
use std::fmt::{self, Write as _};
use uuid::Uuid;

/// Timestamp layout used for both `%s` and debug rendering.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// A value supplied to a fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL / absent value.
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// A string. Quoted in debug output.
    Text(String),
    /// Raw SQL text. Never quoted, not even in debug output.
    Raw(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
    Json(serde_json::Value),
    /// An ordered sequence, consumed by the `+` and `#` modifiers.
    List(Vec<Value>),
}

impl Value {
    /// Create a raw SQL value (rendered verbatim, even in debug output).
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    /// Create a binary value.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Create a list from any iterator of convertible items.
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether `%d` accepts this value. `NaN` and infinities are not SQL numbers.
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Int(_) | Self::UInt(_) => true,
            Self::Float(v) => v.is_finite(),
            _ => false,
        }
    }

    /// The items of a list value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Write the inline-literal form used by debug builds.
    ///
    /// Strings and every non-numeric value are single-quoted without escaping.
    /// The output is for humans only.
    pub(crate) fn write_debug(&self, out: &mut String) {
        match self {
            Self::Null => out.push_str("NULL"),
            Self::Int(_) | Self::UInt(_) | Self::Float(_) | Self::Raw(_) => {
                let _ = write!(out, "{self}");
            }
            Self::Text(s) => {
                out.push('\'');
                out.push_str(s);
                out.push('\'');
            }
            other => {
                let _ = write!(out, "'{other}'");
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) | Self::Raw(s) => f.write_str(s),
            Self::Bytes(bytes) => {
                f.write_str("\\x")?;
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
            Self::Timestamp(ts) => write!(f, "{}", ts.format(TIMESTAMP_FORMAT)),
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Json(j) => write!(f, "{j}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_int!(Int: i8, i16, i32, i64, u8, u16, u32);
impl_from_int!(UInt: u64);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::UInt(v as u64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(v: Cow<'_, str>) -> Self {
        Self::Text(v.into_owned())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Timestamp(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Self::Timestamp(v.and_utc())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Self::Uuid(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

impl From<Columns> for Value {
    fn from(v: Columns) -> Self {
        Self::Raw(v.to_string())
    }
}

impl From<&Columns> for Value {
    fn from(v: &Columns) -> Self {
        Self::Raw(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::list(v)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Self::list(v)
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Self::list(v.iter().cloned())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::list(iter)
    }
}
