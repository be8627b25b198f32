use chrono::NaiveDate;
use serde::Serialize;

use super::types::{NameFormat, TimeWindow};

/// A partition name and the query bound to its window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPartition {
    pub name: String,
    pub query: String,
    pub window: TimeWindow,
}

/// Derives the partition name for a window anchor.
///
/// The same `(prefix, anchor, format)` triple always produces the same
/// name, which is what makes create-or-replace and targeted deletes
/// idempotent without consulting server state.
pub fn partition_name(prefix: &str, anchor: NaiveDate, format: NameFormat) -> String {
    format!("{}{}", prefix, format.render(anchor))
}

/// Resolves a SQL template and window into a named partition query.
///
/// The placeholder is replaced at its first occurrence only. A template
/// without the placeholder is passed through unchanged; supplying a
/// template that carries the token when a time filter is required is the
/// caller's responsibility.
pub fn resolve(
    template: &str,
    placeholder: &str,
    date_column: &str,
    window: &TimeWindow,
    prefix: &str,
    format: NameFormat,
) -> ResolvedPartition {
    let condition = window.condition(date_column);
    ResolvedPartition {
        name: partition_name(prefix, window.start, format),
        query: template.replacen(placeholder, &condition, 1),
        window: window.clone(),
    }
}
