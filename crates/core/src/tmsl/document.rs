use std::fmt;

use serde::Serialize;

use crate::partition::PartitionIdentity;

/// A rendered TMSL document ready to send to the execution service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TmslScript(String);

impl TmslScript {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TmslScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn script(body: String) -> TmslScript {
    TmslScript(body)
}

/// A declarative partition operation against the remote model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionOperation {
    /// Create the partition, replacing any existing definition.
    CreateOrReplace {
        identity: PartitionIdentity,
        query: String,
        data_source: String,
    },
    /// Delete the partition. The target must exist on the remote model.
    Delete { identity: PartitionIdentity },
}

impl PartitionOperation {
    /// Partition coordinates this operation targets.
    pub fn identity(&self) -> &PartitionIdentity {
        match self {
            PartitionOperation::CreateOrReplace { identity, .. } => identity,
            PartitionOperation::Delete { identity } => identity,
        }
    }

    /// Operation keyword as the remote parser sees it.
    pub fn kind(&self) -> &'static str {
        match self {
            PartitionOperation::CreateOrReplace { .. } => "createOrReplace",
            PartitionOperation::Delete { .. } => "delete",
        }
    }

    /// Renders the fixed document for this operation.
    ///
    /// Field values are interpolated verbatim for wire compatibility with
    /// the documents the remote parser already accepts. A value carrying
    /// a raw `"` corrupts the quoting; see [`contains_raw_quotes`].
    pub fn to_script(&self) -> TmslScript {
        match self {
            PartitionOperation::CreateOrReplace {
                identity,
                query,
                data_source,
            } => TmslScript(format!(
                r#"{{
  "createOrReplace": {{
    "object": {{
      "database": "{database}",
      "table": "{table}",
      "partition": "{partition}"
    }},
    "partition": {{
      "name": "{partition}",
      "source": {{
        "query": "{query}",
        "dataSource": "{data_source}"
      }}
    }}
  }}
}}"#,
                database = identity.database,
                table = identity.table,
                partition = identity.partition,
                query = query,
                data_source = data_source,
            )),
            PartitionOperation::Delete { identity } => TmslScript(format!(
                r#"{{
  "delete": {{
    "object": {{
      "database": "{database}",
      "table": "{table}",
      "partition": "{partition}"
    }}
  }}
}}"#,
                database = identity.database,
                table = identity.table,
                partition = identity.partition,
            )),
        }
    }
}

/// True if a value would corrupt the rendered document's quoting.
///
/// Interpolation is deliberately unescaped; callers that cannot trust
/// their SQL text should check this before sending.
pub fn contains_raw_quotes(value: &str) -> bool {
    value.contains('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> PartitionIdentity {
        PartitionIdentity::new("Sales", "Fact", "Fact_2019")
    }

    #[test]
    fn test_create_document_shape() {
        let operation = PartitionOperation::CreateOrReplace {
            identity: identity(),
            query: "SELECT * FROM T WHERE Date >= '20190101' AND Date < '20200101'".to_string(),
            data_source: "SqlServer".to_string(),
        };
        let value: serde_json::Value =
            serde_json::from_str(operation.to_script().as_str()).unwrap();

        let object = &value["createOrReplace"]["object"];
        assert_eq!(object["database"], "Sales");
        assert_eq!(object["table"], "Fact");
        assert_eq!(object["partition"], "Fact_2019");

        let partition = &value["createOrReplace"]["partition"];
        assert_eq!(partition["name"], "Fact_2019");
        assert_eq!(
            partition["source"]["query"],
            "SELECT * FROM T WHERE Date >= '20190101' AND Date < '20200101'"
        );
        assert_eq!(partition["source"]["dataSource"], "SqlServer");
    }

    #[test]
    fn test_delete_document_shape() {
        let operation = PartitionOperation::Delete {
            identity: identity(),
        };
        let value: serde_json::Value =
            serde_json::from_str(operation.to_script().as_str()).unwrap();

        let object = &value["delete"]["object"];
        assert_eq!(object["database"], "Sales");
        assert_eq!(object["table"], "Fact");
        assert_eq!(object["partition"], "Fact_2019");
        assert!(value["delete"]["partition"].is_null());
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let operation = PartitionOperation::Delete {
            identity: identity(),
        };
        assert_eq!(operation.to_script(), operation.to_script());
    }

    #[test]
    fn test_raw_quotes_are_inserted_verbatim() {
        // The corrupt output is the compatible output; the helper is the
        // only guard.
        let query = r#"SELECT "a" FROM T"#;
        assert!(contains_raw_quotes(query));

        let operation = PartitionOperation::CreateOrReplace {
            identity: identity(),
            query: query.to_string(),
            data_source: "SqlServer".to_string(),
        };
        let rendered = operation.to_script();
        assert!(rendered.as_str().contains(r#""query": "SELECT "a" FROM T""#));
        assert!(serde_json::from_str::<serde_json::Value>(rendered.as_str()).is_err());
    }

    #[test]
    fn test_operation_kind() {
        let create = PartitionOperation::CreateOrReplace {
            identity: identity(),
            query: String::new(),
            data_source: String::new(),
        };
        let delete = PartitionOperation::Delete {
            identity: identity(),
        };
        assert_eq!(create.kind(), "createOrReplace");
        assert_eq!(delete.kind(), "delete");
    }
}
