//! Verb scanner.
//!
//! Splits a format string into literal text and `%` verbs in a single
//! left-to-right pass. The grammar is closed:
//!
//! | verb | meaning |
//! |------|---------|
//! | `%s` | textual representation, written as-is |
//! | `%d` | number, written as-is |
//! | `%$` `%?` `%@` | one bound placeholder |
//! | `%+$` `%+?` `%+@` | list, one placeholder per item |
//! | `%#$` `%#?` `%#@` | list of lists, parenthesized groups |
//! | `%%` | literal `%` |

use crate::dialect::Dialect;
use crate::error::{BuildError, BuildResult};

/// A verb that consumes one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verb {
    /// `%s`
    Text,
    /// `%d`
    Number,
    /// `%$`, `%?`, `%@`
    Bind(Dialect),
    /// `%+$`, `%+?`, `%+@`
    Spread(Dialect),
    /// `%#$`, `%#?`, `%#@`
    Batch(Dialect),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    /// `%%`
    Percent,
    Verb(Verb),
}

/// Iterator over the segments of one fragment.
///
/// Stops after yielding the first error.
pub(crate) struct Scanner<'a> {
    rest: &'a str,
    fragment: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(fragment: usize, format: &'a str) -> Self {
        Self {
            rest: format,
            fragment,
        }
    }

    fn verb(&mut self) -> BuildResult<Segment<'a>> {
        let fragment = self.fragment;
        // skip '%'
        let mut chars = self.rest[1..].chars();

        let segment = match chars.next() {
            None => Err(BuildError::LonelyModifier { fragment }),
            Some(c) if c.is_whitespace() => Err(BuildError::LonelyModifier { fragment }),
            Some('%') => Ok(Segment::Percent),
            Some('s') => Ok(Segment::Verb(Verb::Text)),
            Some('d') => Ok(Segment::Verb(Verb::Number)),
            Some(modifier @ ('+' | '#')) => match chars.next().and_then(Dialect::from_verb) {
                Some(dialect) if modifier == '+' => Ok(Segment::Verb(Verb::Spread(dialect))),
                Some(dialect) => Ok(Segment::Verb(Verb::Batch(dialect))),
                None => Err(BuildError::IncorrectVerb { fragment, modifier }),
            },
            Some(c) => match Dialect::from_verb(c) {
                Some(dialect) => Ok(Segment::Verb(Verb::Bind(dialect))),
                None => Err(BuildError::UnsupportedVerb { fragment, verb: c }),
            },
        };

        self.rest = if segment.is_ok() { chars.as_str() } else { "" };
        segment
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = BuildResult<Segment<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find('%') {
            Some(0) => Some(self.verb()),
            Some(idx) => {
                let (literal, rest) = self.rest.split_at(idx);
                self.rest = rest;
                Some(Ok(Segment::Literal(literal)))
            }
            None => {
                let literal = self.rest;
                self.rest = "";
                Some(Ok(Segment::Literal(literal)))
            }
        }
    }
}
