use std::fmt;

use serde::{Deserialize, Serialize};

use super::document::{script, TmslScript};

/// How thoroughly the remote service recomputes data.
///
/// Opaque to the core: the string is handed to the service as-is and
/// never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefreshMode(String);

impl RefreshMode {
    pub fn new(mode: impl Into<String>) -> Self {
        Self(mode.into())
    }

    /// Full recompute, forced by the year-end consolidation.
    pub fn full() -> Self {
        Self("full".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RefreshMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Refresh scope. Exactly one granularity per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "scope")]
pub enum ProcessTarget {
    Database {
        database: String,
    },
    Table {
        database: String,
        table: String,
    },
    Partition {
        database: String,
        table: String,
        partition: String,
    },
}

impl ProcessTarget {
    /// Picks the most specific scope from the supplied identifiers:
    /// partition over table over database. A partition only narrows the
    /// scope when its table is named as well.
    pub fn from_parts(database: String, table: Option<String>, partition: Option<String>) -> Self {
        match (table, partition) {
            (Some(table), Some(partition)) => ProcessTarget::Partition {
                database,
                table,
                partition,
            },
            (Some(table), None) => ProcessTarget::Table { database, table },
            (None, _) => ProcessTarget::Database { database },
        }
    }

    pub fn database(&self) -> &str {
        match self {
            ProcessTarget::Database { database }
            | ProcessTarget::Table { database, .. }
            | ProcessTarget::Partition { database, .. } => database,
        }
    }

    /// Slash-joined path for logs and reports.
    pub fn describe(&self) -> String {
        match self {
            ProcessTarget::Database { database } => database.clone(),
            ProcessTarget::Table { database, table } => format!("{}/{}", database, table),
            ProcessTarget::Partition {
                database,
                table,
                partition,
            } => format!("{}/{}/{}", database, table, partition),
        }
    }
}

/// A processing command for the execution service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingRequest {
    pub target: ProcessTarget,
    pub refresh_mode: RefreshMode,
}

/// Renders the TMSL refresh document for a processing request.
///
/// Same verbatim-interpolation discipline as the partition documents.
pub fn refresh_script(request: &ProcessingRequest) -> TmslScript {
    let object = match &request.target {
        ProcessTarget::Database { database } => {
            format!(r#"{{ "database": "{}" }}"#, database)
        }
        ProcessTarget::Table { database, table } => format!(
            r#"{{ "database": "{}", "table": "{}" }}"#,
            database, table
        ),
        ProcessTarget::Partition {
            database,
            table,
            partition,
        } => format!(
            r#"{{ "database": "{}", "table": "{}", "partition": "{}" }}"#,
            database, table, partition
        ),
    };
    script(format!(
        r#"{{
  "refresh": {{
    "type": "{mode}",
    "objects": [
      {object}
    ]
  }}
}}"#,
        mode = request.refresh_mode,
        object = object,
    ))
}
