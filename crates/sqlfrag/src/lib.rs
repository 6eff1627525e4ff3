//! # sqlfrag
//!
//! Compose parameterized SQL across many calls from printf-style fragments.
//!
//! ## Features
//!
//! - **Deferred**: fragments are only scanned when the query is built
//! - **Typed verbs**: raw text (`%s`), numbers (`%d`), bound values (`%$`, `%?`, `%@`)
//! - **List expansion**: `%+$` for `IN (...)` lists, `%#$` for multi-row `VALUES`
//! - **One dialect per query**: mixing `$N`, `?` and `@pN` is an error
//! - **Debug builds**: inline values for inspection with [`Builder::debug_build`]
//!
//! ## Verbs
//!
//! | verb | renders |
//! |------|---------|
//! | `%s` | the value's text, not bound |
//! | `%d` | a number, not bound |
//! | `%$` / `%?` / `%@` | `$N` / `?` / `@pN`, value bound |
//! | `%+$` / `%+?` / `%+@` | one placeholder per list item, comma-joined |
//! | `%#$` / `%#?` / `%#@` | one `(...)` group per inner list, comma-joined |
//! | `%%` | a literal `%` |
//!
//! ```ignore
//! use sqlfrag::{Builder, addf};
//!
//! let mut b = Builder::new();
//! addf!(b, "SELECT %s FROM %s", "foo,bar", "table");
//! addf!(b, "WHERE id = %$", 123);
//!
//! let built = b.build()?;
//! assert_eq!(built.sql(), "SELECT foo,bar FROM table\nWHERE id = $1");
//! assert_eq!(built.args(), &[sqlfrag::Value::Int(123)]);
//! ```

pub mod builder;
pub mod columns;
pub mod config;
pub mod dialect;
pub mod error;
pub mod prelude;
pub mod value;

mod macros;

#[cfg(feature = "postgres")]
mod pg;

#[cfg(feature = "tracing")]
mod trace;

pub use builder::{Builder, Built, q};
pub use columns::Columns;
pub use config::BuilderConfig;
pub use dialect::Dialect;
pub use error::{BuildError, BuildResult};
pub use value::Value;
