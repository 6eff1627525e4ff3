/// Append a fragment with heterogeneous values.
///
/// Each value is converted with [`Value::from`](crate::Value). Returns the
/// builder's `&mut Self`, so calls can be chained.
///
/// ```ignore
/// use sqlfrag::{Builder, addf};
///
/// let mut b = Builder::new();
/// addf!(b, "SELECT %s FROM %s", "foo, bar", "users");
/// addf!(b, "WHERE active = %$ AND user_id = %$", true, 42);
/// ```
#[macro_export]
macro_rules! addf {
    ($builder:expr, $format:expr $(,)?) => {
        $builder.add($format)
    };
    ($builder:expr, $format:expr, $($arg:expr),+ $(,)?) => {{
        let args: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::Value::from($arg)),+];
        $builder.addf($format, args)
    }};
}

/// Build a single fragment with heterogeneous values in one call.
///
/// ```ignore
/// let built = sqlfrag::q!("SELECT %s FROM users WHERE id = %$", "name", 7)?;
/// assert_eq!(built.sql(), "SELECT name FROM users WHERE id = $1");
/// ```
#[macro_export]
macro_rules! q {
    ($format:expr $(,)?) => {
        $crate::q($format, ::std::vec::Vec::<$crate::Value>::new())
    };
    ($format:expr, $($arg:expr),+ $(,)?) => {{
        let args: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::Value::from($arg)),+];
        $crate::q($format, args)
    }};
}
