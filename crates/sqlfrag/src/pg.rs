//! tokio-postgres interop.
//!
//! [`Value`] implements [`ToSql`] so a [`Built`] query can be handed to a
//! `tokio_postgres::Client` directly:
//!
//! ```ignore
//! let built = sqlfrag::q!("SELECT * FROM users WHERE id = %$", 42)?;
//! let rows = client.query(built.sql(), &built.params_ref()).await?;
//! ```
//!
//! Integers and floats are narrowed to the declared parameter type; values
//! that do not fit fail at execution time rather than wrapping.

use crate::builder::Built;
use crate::value::Value;
use bytes::BytesMut;
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type};

type BoxError = Box<dyn Error + Sync + Send>;

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql_checked(ty, out),
            Value::Int(v) => int_to_sql(*v, ty, out),
            Value::UInt(v) => int_to_sql(i64::try_from(*v)?, ty, out),
            Value::Float(v) => match *ty {
                Type::FLOAT4 => (*v as f32).to_sql_checked(ty, out),
                _ => v.to_sql_checked(ty, out),
            },
            Value::Text(s) | Value::Raw(s) => s.to_sql_checked(ty, out),
            Value::Bytes(v) => v.to_sql_checked(ty, out),
            Value::Timestamp(ts) => match *ty {
                Type::TIMESTAMP => ts.naive_utc().to_sql_checked(ty, out),
                _ => ts.to_sql_checked(ty, out),
            },
            Value::Uuid(v) => v.to_sql_checked(ty, out),
            Value::Json(v) => v.to_sql_checked(ty, out),
            Value::List(items) => items.to_sql_checked(ty, out),
        }
    }

    // Each variant checks the concrete type itself.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    tokio_postgres::types::to_sql_checked!();
}

fn int_to_sql(v: i64, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
    match *ty {
        Type::INT2 => i16::try_from(v)?.to_sql_checked(ty, out),
        Type::INT4 => i32::try_from(v)?.to_sql_checked(ty, out),
        Type::FLOAT8 => (v as f64).to_sql_checked(ty, out),
        Type::FLOAT4 => (v as f32).to_sql_checked(ty, out),
        _ => v.to_sql_checked(ty, out),
    }
}

impl Built {
    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.args()
            .iter()
            .map(|v| v as &(dyn ToSql + Sync))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(v: impl Into<Value>, ty: &Type) -> Result<(IsNull, Vec<u8>), BoxError> {
        let mut buf = BytesMut::new();
        let is_null = v.into().to_sql_checked(ty, &mut buf)?;
        Ok((is_null, buf.to_vec()))
    }

    #[test]
    fn ints_narrow_to_declared_type() {
        assert_eq!(encode(7, &Type::INT2).unwrap().1, 7_i16.to_be_bytes());
        assert_eq!(encode(7, &Type::INT4).unwrap().1, 7_i32.to_be_bytes());
        assert_eq!(encode(7, &Type::INT8).unwrap().1, 7_i64.to_be_bytes());
    }

    #[test]
    fn out_of_range_int_is_an_error() {
        assert!(encode(70_000, &Type::INT2).is_err());
        assert!(encode(u64::MAX, &Type::INT8).is_err());
    }

    #[test]
    fn null_is_null() {
        assert!(matches!(
            encode(None::<i32>, &Type::INT4).unwrap().0,
            IsNull::Yes
        ));
    }

    #[test]
    fn mismatched_type_is_rejected() {
        assert!(encode("x", &Type::INT4).is_err());
        assert!(encode(true, &Type::TEXT).is_err());
    }

    #[test]
    fn text_encodes_as_utf8() {
        assert_eq!(encode("abc", &Type::TEXT).unwrap().1, b"abc");
    }

    #[test]
    fn params_ref_matches_args() {
        let built = crate::q!("a = %$ AND b = %$", 1, "x").unwrap();
        assert_eq!(built.params_ref().len(), 2);
    }
}
