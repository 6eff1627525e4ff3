use super::scan::{Scanner, Segment, Verb};
use crate::dialect::Dialect;
use crate::error::{BuildError, BuildResult};
use crate::value::Value;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Emit placeholders and collect bound values.
    Bind,
    /// Inline every bound value as literal text. Never collects values.
    Debug,
}

/// Template-wide rendering state shared by all fragments of one build.
pub(crate) struct Renderer {
    mode: Mode,
    separator: char,
    out: String,
    args: Vec<Value>,
    counter: usize,
    dialect: Option<Dialect>,
    /// Whether the last fragment completed and wrote its separator.
    terminated: bool,
}

impl Renderer {
    pub(crate) fn new(mode: Mode, separator: char, capacity: usize) -> Self {
        Self {
            mode,
            separator,
            out: String::with_capacity(capacity),
            args: Vec::new(),
            counter: 0,
            dialect: None,
            terminated: false,
        }
    }

    /// Render one fragment followed by the separator.
    ///
    /// On error the fragment is left partially written and no separator is added.
    pub(crate) fn write_fragment(
        &mut self,
        fragment: usize,
        format: &str,
        values: &[Value],
    ) -> BuildResult<()> {
        self.terminated = false;
        let mut remaining = values.iter();
        let mut consumed = 0;

        for segment in Scanner::new(fragment, format) {
            match segment? {
                Segment::Literal(s) => self.out.push_str(s),
                Segment::Percent => self.out.push('%'),
                Segment::Verb(verb) => {
                    let Some(value) = remaining.next() else {
                        return Err(BuildError::TooFewArguments {
                            fragment,
                            have: values.len(),
                            want: consumed + 1,
                        });
                    };
                    consumed += 1;
                    self.write_verb(fragment, verb, value)?;
                }
            }
        }

        if consumed != values.len() {
            return Err(BuildError::TooManyArguments {
                fragment,
                have: values.len(),
                expected: consumed,
            });
        }

        self.out.push(self.separator);
        self.terminated = true;
        Ok(())
    }

    fn write_verb(&mut self, fragment: usize, verb: Verb, value: &Value) -> BuildResult<()> {
        match verb {
            Verb::Text => {
                self.write_text(value);
                Ok(())
            }
            Verb::Number => self.write_number(fragment, value),
            Verb::Bind(dialect) => self.write_bind(fragment, dialect, value),
            Verb::Spread(dialect) => {
                let items = list_of(fragment, value)?;
                self.write_list(fragment, dialect, items)
            }
            Verb::Batch(dialect) => self.write_batch(fragment, dialect, value),
        }
    }

    fn write_text(&mut self, value: &Value) {
        match (self.mode, value) {
            (Mode::Debug, _) => value.write_debug(&mut self.out),
            (Mode::Bind, Value::Null) => {}
            (Mode::Bind, value) => {
                let _ = write!(self.out, "{value}");
            }
        }
    }

    fn write_number(&mut self, fragment: usize, value: &Value) -> BuildResult<()> {
        if self.mode == Mode::Debug {
            value.write_debug(&mut self.out);
            return Ok(());
        }
        if !value.is_numeric() {
            return Err(BuildError::NonNumericArgument { fragment });
        }
        let _ = write!(self.out, "{value}");
        Ok(())
    }

    fn write_batch(&mut self, fragment: usize, dialect: Dialect, value: &Value) -> BuildResult<()> {
        let rows = list_of(fragment, value)?;
        // Check every row up front so a bad row leaves no values behind.
        let rows = rows
            .iter()
            .map(|row| list_of(fragment, row))
            .collect::<BuildResult<Vec<_>>>()?;

        for (i, row) in rows.into_iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push('(');
            self.write_list(fragment, dialect, row)?;
            self.out.push(')');
        }
        Ok(())
    }

    fn write_list(&mut self, fragment: usize, dialect: Dialect, items: &[Value]) -> BuildResult<()> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.write_bind(fragment, dialect, item)?;
        }
        Ok(())
    }

    fn write_bind(&mut self, fragment: usize, dialect: Dialect, value: &Value) -> BuildResult<()> {
        if self.mode == Mode::Debug {
            value.write_debug(&mut self.out);
            return Ok(());
        }

        match self.dialect {
            None => self.dialect = Some(dialect),
            Some(first) if first != dialect => {
                return Err(BuildError::MixedPlaceholders {
                    fragment,
                    first,
                    found: dialect,
                });
            }
            Some(_) => {}
        }

        if dialect.is_numbered() {
            self.counter += 1;
        }
        dialect.write_token(&mut self.out, self.counter);
        self.args.push(value.clone());
        Ok(())
    }

    /// Trim the separator of the last completed fragment and hand back the
    /// text, values and dialect.
    pub(crate) fn finish(mut self) -> (String, Vec<Value>, Option<Dialect>) {
        if self.terminated {
            self.out.pop();
        }
        (self.out, self.args, self.dialect)
    }
}

fn list_of(fragment: usize, value: &Value) -> BuildResult<&[Value]> {
    value
        .as_list()
        .ok_or(BuildError::NonCollectionArgument { fragment })
}
