//! `tracing` events for builds.
//!
//! Enable via the crate feature: `sqlfrag = { features = ["tracing"] }`.

use crate::builder::Built;
use crate::config::BuilderConfig;
use crate::error::BuildError;

/// Truncate `sql` to at most `max_bytes` without splitting a char.
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

fn truncate_sql(config: &BuilderConfig, sql: &str) -> String {
    match config.max_logged_sql_length {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

pub(crate) fn built(config: &BuilderConfig, fragments: usize, built: &Built) {
    let dialect = built.dialect().map(tracing::field::display);
    tracing::debug!(
        target: "sqlfrag.build",
        fragments,
        param_count = built.args().len(),
        dialect,
        sql = %truncate_sql(config, built.sql()),
    );
}

pub(crate) fn failed(err: &BuildError) {
    tracing::debug!(
        target: "sqlfrag.build",
        fragment = err.fragment(),
        error = %err,
        "build failed",
    );
}

pub(crate) fn debug_built(config: &BuilderConfig, sql: &str, failure: Option<&BuildError>) {
    match failure {
        Some(err) => tracing::debug!(
            target: "sqlfrag.debug",
            sql = %truncate_sql(config, sql),
            error = %err,
            "debug build stopped early",
        ),
        None => tracing::debug!(
            target: "sqlfrag.debug",
            sql = %truncate_sql(config, sql),
        ),
    }
}
