/// Configuration for a [`Builder`](crate::Builder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Character written after every fragment. One trailing separator is
    /// trimmed from the final text.
    pub separator: char,
    /// Truncate SQL in log events (in bytes). `None` means no truncation.
    pub max_logged_sql_length: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            separator: '\n',
            max_logged_sql_length: Some(200),
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults (newline separator).
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that joins fragments with a single space.
    pub fn oneline() -> Self {
        Self::default().with_separator(' ')
    }

    /// Set the fragment separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set maximum SQL length written to log events.
    pub fn with_max_logged_sql_length(mut self, len: usize) -> Self {
        self.max_logged_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in log events.
    pub fn no_truncate(mut self) -> Self {
        self.max_logged_sql_length = None;
        self
    }
}
