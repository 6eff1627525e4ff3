//! Fragment accumulator.
//!
//! A [`Builder`] stores `(format, values)` pairs in call order and defers all
//! parsing to [`Builder::build`]. Building does not consume or mutate the
//! builder, so it can be called any number of times with identical results.
//!
//! # Example
//!
//! ```ignore
//! use sqlfrag::{Builder, Columns, addf};
//!
//! let mut b = Builder::new();
//! addf!(b, "SELECT %s FROM %s", Columns::from(["foo", "bar"]), "users");
//! addf!(b, "WHERE id = %$", 123);
//!
//! let built = b.build()?;
//! assert_eq!(built.sql(), "SELECT foo, bar FROM users\nWHERE id = $1");
//! ```

mod render;
mod scan;


use crate::config::BuilderConfig;
use crate::dialect::Dialect;
use crate::error::BuildResult;
use crate::value::Value;
use render::{Mode, Renderer};

#[derive(Debug, Clone)]
struct Fragment {
    format: &'static str,
    args: Vec<Value>,
}

/// Builder for SQL queries.
///
/// Formats are `&'static str`, so string literals and `const`s are accepted
/// while runtime-built strings are rejected at compile time. Leaking a `String`
/// bypasses this and reopens the door to SQL injection through the format.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    fragments: Vec<Fragment>,
    config: BuilderConfig,
}

/// A successfully built query: SQL text plus values in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct Built {
    sql: String,
    args: Vec<Value>,
    dialect: Option<Dialect>,
}

impl Built {
    /// The rendered SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound values, one per placeholder, in placeholder order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// The placeholder dialect used, if any value was bound.
    pub fn dialect(&self) -> Option<Dialect> {
        self.dialect
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}

impl Builder {
    /// Create an empty builder joining fragments with newlines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder joining fragments with a single space.
    pub fn oneline() -> Self {
        Self::with_config(BuilderConfig::oneline())
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            fragments: Vec::new(),
            config,
        }
    }

    /// Append a format fragment and its values.
    ///
    /// Nothing is validated here; errors surface from [`build`](Self::build).
    /// Heterogeneous values are easiest to pass through the [`addf!`](crate::addf) macro.
    pub fn addf<I>(&mut self, format: &'static str, args: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.fragments.push(Fragment {
            format,
            args: args.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Append a fragment that takes no values.
    ///
    /// The format is still scanned, so `%%` yields `%` and any other verb fails
    /// the build with too few arguments.
    pub fn add(&mut self, format: &'static str) -> &mut Self {
        self.addf(format, Vec::<Value>::new())
    }

    /// Number of accumulated fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Render all fragments into SQL text and bound values.
    ///
    /// Stops at the first error. Never mutates the builder.
    pub fn build(&self) -> BuildResult<Built> {
        let result = self.render().map(|(sql, args, dialect)| Built {
            sql,
            args,
            dialect,
        });

        #[cfg(feature = "tracing")]
        match &result {
            Ok(built) => crate::trace::built(&self.config, self.fragments.len(), built),
            Err(err) => crate::trace::failed(err),
        }

        result
    }

    /// Render all fragments with values inlined as literals.
    ///
    /// For human inspection only: strings are quoted but not escaped, so the
    /// output must never be sent to a database. Rendering stops at the first
    /// error and the text produced up to that point is returned.
    pub fn debug_build(&self) -> String {
        let mut renderer = self.renderer(Mode::Debug);
        let mut failure = None;
        for (i, fragment) in self.fragments.iter().enumerate() {
            if let Err(err) = renderer.write_fragment(i, fragment.format, &fragment.args) {
                failure = Some(err);
                break;
            }
        }
        let (sql, _, _) = renderer.finish();

        #[cfg(feature = "tracing")]
        crate::trace::debug_built(&self.config, &sql, failure.as_ref());
        #[cfg(not(feature = "tracing"))]
        let _ = failure;

        sql
    }

    fn renderer(&self, mode: Mode) -> Renderer {
        let capacity = self
            .fragments
            .iter()
            .map(|f| f.format.len() + 1)
            .sum::<usize>();
        Renderer::new(mode, self.config.separator, capacity)
    }

    fn render(&self) -> BuildResult<(String, Vec<Value>, Option<Dialect>)> {
        let mut renderer = self.renderer(Mode::Bind);
        for (i, fragment) in self.fragments.iter().enumerate() {
            renderer.write_fragment(i, fragment.format, &fragment.args)?;
        }
        Ok(renderer.finish())
    }
}

/// Build a single fragment in one call.
///
/// ```ignore
/// let built = sqlfrag::q("SELECT * FROM users WHERE id = %$", [42])?;
/// ```
pub fn q<I>(format: &'static str, args: I) -> BuildResult<Built>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let mut b = Builder::new();
    b.addf(format, args);
    b.build()
}
