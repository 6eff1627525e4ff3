//! Placeholder dialects.

use std::fmt;

/// The family of placeholder syntax used for bound values.
///
/// A single query may only use one dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// PostgreSQL: `$1, $2, ...`
    Dollar,
    /// MySQL/SQLite: `?, ?, ...`
    Question,
    /// MSSQL: `@p1, @p2, ...`
    AtP,
}

impl Dialect {
    /// Map a verb character (`$`, `?`, `@`) to its dialect.
    pub fn from_verb(verb: char) -> Option<Self> {
        match verb {
            '$' => Some(Self::Dollar),
            '?' => Some(Self::Question),
            '@' => Some(Self::AtP),
            _ => None,
        }
    }

    /// The verb character selecting this dialect.
    pub fn verb(self) -> char {
        match self {
            Self::Dollar => '$',
            Self::Question => '?',
            Self::AtP => '@',
        }
    }

    /// Whether placeholders of this dialect carry a running index.
    pub fn is_numbered(self) -> bool {
        !matches!(self, Self::Question)
    }

    /// Write the placeholder token for the `n`-th (1-based) bound value.
    pub fn write_token(self, out: &mut String, n: usize) {
        match self {
            Self::Dollar => {
                out.push('$');
                push_usize(out, n);
            }
            Self::Question => out.push('?'),
            Self::AtP => {
                out.push_str("@p");
                push_usize(out, n);
            }
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dollar => f.write_str("$"),
            Self::Question => f.write_str("?"),
            Self::AtP => f.write_str("@p"),
        }
    }
}

// Write a usize as decimal digits into `out` without going through fmt.
#[inline]
fn push_usize(out: &mut String, mut n: usize) {
    if n < 10 {
        out.push((b'0' + n as u8) as char);
        return;
    }
    let mut buf = [0u8; 20];
    let mut pos = buf.len();
    while n > 0 {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    for &b in &buf[pos..] {
        out.push(b as char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_per_dialect() {
        let mut out = String::new();
        Dialect::Dollar.write_token(&mut out, 1);
        out.push(' ');
        Dialect::Question.write_token(&mut out, 2);
        out.push(' ');
        Dialect::AtP.write_token(&mut out, 123);
        assert_eq!(out, "$1 ? @p123");
    }

    #[test]
    fn verb_round_trip() {
        for d in [Dialect::Dollar, Dialect::Question, Dialect::AtP] {
            assert_eq!(Dialect::from_verb(d.verb()), Some(d));
        }
        assert_eq!(Dialect::from_verb('s'), None);
    }

    #[test]
    fn only_question_is_unnumbered() {
        assert!(Dialect::Dollar.is_numbered());
        assert!(Dialect::AtP.is_numbered());
        assert!(!Dialect::Question.is_numbered());
    }
}
