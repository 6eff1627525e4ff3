//! Error types for sqlfrag

use crate::dialect::Dialect;
use thiserror::Error;

/// Result type alias for build operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors detected while rendering accumulated fragments.
///
/// Every variant carries the zero-based index of the fragment (the `addf` call)
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A verb needed a value but the fragment ran out of arguments.
    #[error("too few arguments in fragment {fragment}: have {have}, want {want}")]
    TooFewArguments {
        fragment: usize,
        have: usize,
        want: usize,
    },

    /// The fragment was scanned completely with arguments left over.
    #[error("too many arguments in fragment {fragment}: have {have}, expected {expected}")]
    TooManyArguments {
        fragment: usize,
        have: usize,
        expected: usize,
    },

    /// Unknown verb character after `%`.
    #[error("unsupported verb '%{verb}' in fragment {fragment}")]
    UnsupportedVerb { fragment: usize, verb: char },

    /// `+` or `#` modifier not followed by `$`, `?` or `@`.
    #[error("incorrect verb in fragment {fragment}: '{modifier}' requires additional '$', '?' or '@'")]
    IncorrectVerb { fragment: usize, modifier: char },

    /// `%` with nothing after it.
    #[error("lonely '%' modifier in fragment {fragment}")]
    LonelyModifier { fragment: usize },

    /// More than one placeholder dialect used in a single query.
    #[error(
        "mixed placeholders must not be used in a single query: '{first}' then '{found}' in fragment {fragment}"
    )]
    MixedPlaceholders {
        fragment: usize,
        first: Dialect,
        found: Dialect,
    },

    /// A `+`/`#` verb received a value that is not a list (or a batch row that is not a list).
    #[error("non-list argument used with a list modifier in fragment {fragment}")]
    NonCollectionArgument { fragment: usize },

    /// `%d` received a non-numeric value.
    #[error("non-numeric argument used with '%d' in fragment {fragment}")]
    NonNumericArgument { fragment: usize },
}

impl BuildError {
    /// Index of the fragment that produced this error.
    pub fn fragment(&self) -> usize {
        match *self {
            Self::TooFewArguments { fragment, .. }
            | Self::TooManyArguments { fragment, .. }
            | Self::UnsupportedVerb { fragment, .. }
            | Self::IncorrectVerb { fragment, .. }
            | Self::LonelyModifier { fragment }
            | Self::MixedPlaceholders { fragment, .. }
            | Self::NonCollectionArgument { fragment }
            | Self::NonNumericArgument { fragment } => fragment,
        }
    }

    /// Check if this is an argument count mismatch
    pub fn is_argument_count(&self) -> bool {
        matches!(
            self,
            Self::TooFewArguments { .. } | Self::TooManyArguments { .. }
        )
    }

    /// Check if this error comes from the format string itself rather than its values
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedVerb { .. } | Self::IncorrectVerb { .. } | Self::LonelyModifier { .. }
        )
    }

    /// Check if this is a mixed placeholder error
    pub fn is_mixed_placeholders(&self) -> bool {
        matches!(self, Self::MixedPlaceholders { .. })
    }
}
