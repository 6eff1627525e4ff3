//! Convenient imports for typical `sqlfrag` usage.
//!
//! ```ignore
//! use sqlfrag::prelude::*;
//! ```

pub use crate::{BuildError, BuildResult, Builder, BuilderConfig, Built, Columns, Value};
pub use crate::{addf, q};
