use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use flowslim_conf::SchemaPaths;

use crate::filter::filter_for_id_workflows;
use crate::stats::ReductionReport;
use crate::store::SchemaStore;
use crate::{ToolDefinition, report};

const DESCRIPTION: &str = r#"
Extract and filter the serverless workflow JSON schema so that only the
ID-based workflow variant remains.

Usage:

- Reads the consolidated workflow schema from the configured input path
- Removes the 'key' property from the root properties
- Narrows the oneOf constraint to the variant requiring 'id', 'specVersion' and 'states'
- Keeps all shared definitions and properties intact
- Writes the filtered schema to the configured output path
- Returns token and file size reduction statistics as a multi-line report
"#;

/// Narrows the consolidated workflow schema to the ID-based variant and
/// reports the size reduction. The input and output locations are
/// injected at construction time, the store at execution time.
pub struct FilterSchemaTool {
    paths: SchemaPaths,
}

impl FilterSchemaTool {
    pub fn new(paths: SchemaPaths) -> Self {
        FilterSchemaTool { paths }
    }
}

#[derive(JsonSchema, Serialize, Deserialize, Clone, Debug)]
pub struct FilterSchemaInput {
    /// Opaque session identifier, recorded in the logs for traceability.
    pub session_id: String,
}

impl ToolDefinition for FilterSchemaTool {
    type Input = FilterSchemaInput;

    fn name(&self) -> &'static str {
        "filter_schema"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn execute(
        &self,
        store: &mut dyn SchemaStore,
        input: Self::Input,
    ) -> Result<String, anyhow::Error> {
        tracing::info!(session_id = %input.session_id, "filter_schema");

        let original = store.load(&self.paths.input)?;
        let filtered = filter_for_id_workflows(&original);

        store.save(&self.paths.output, &filtered)?;

        // Compact serializations, so the persisted pretty formatting does
        // not skew the comparison.
        let original_compact = serde_json::to_string(&original)?;
        let filtered_compact = serde_json::to_string(&filtered)?;
        let stats = ReductionReport::compare(&original_compact, &filtered_compact);

        Ok(report::render(&self.paths.input, &self.paths.output, &stats))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde_json::{Value, json};

    use super::*;
    use crate::store::StoreError;
    use crate::testing::MemoryStore;

    fn consolidated_schema() -> Value {
        json!({
            "properties": {
                "key": {"type": "string"},
                "id": {"type": "string"}
            },
            "oneOf": [
                {"required": ["key", "specVersion", "states"]},
                {"required": ["id", "specVersion", "states"]}
            ],
            "description": "Serverless Workflow specification - workflow schema",
            "definitions": {"states": {"type": "array"}}
        })
    }

    fn run(store: &mut MemoryStore, paths: SchemaPaths) -> Result<String, anyhow::Error> {
        FilterSchemaTool::new(paths).execute(
            store,
            FilterSchemaInput {
                session_id: "test-session".to_string(),
            },
        )
    }

    #[test]
    fn test_execute_persists_filtered_schema() {
        let paths = SchemaPaths::new("in/full.json", "out/id_only.json");
        let mut store = MemoryStore::new().with_file("in/full.json", consolidated_schema());

        let summary = run(&mut store, paths).unwrap();

        let written = store.get(Path::new("out/id_only.json")).unwrap();
        assert_eq!(
            written["oneOf"],
            json!([{"required": ["id", "specVersion", "states"]}])
        );
        assert!(written["properties"].get("key").is_none());
        assert_eq!(written["definitions"], consolidated_schema()["definitions"]);

        assert!(summary.contains("Token count reduction"));
        assert!(summary.contains("File size reduction"));
        assert!(summary.contains("id_only.json"));
    }

    #[test]
    fn test_execute_leaves_original_in_place() {
        let paths = SchemaPaths::new("in/full.json", "out/id_only.json");
        let mut store = MemoryStore::new().with_file("in/full.json", consolidated_schema());

        run(&mut store, paths).unwrap();

        assert_eq!(
            store.get(Path::new("in/full.json")).unwrap(),
            &consolidated_schema()
        );
    }

    #[test]
    fn test_execute_missing_input() {
        let paths = SchemaPaths::new("in/full.json", "out/id_only.json");
        let mut store = MemoryStore::new();

        let err = run(&mut store, paths).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::Missing(_))
        ));
        assert!(store.get(Path::new("out/id_only.json")).is_none());
    }

    #[test]
    fn test_execute_end_to_end_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("full.json");
        let output = dir.path().join("nested").join("id_only.json");
        std::fs::write(
            &input,
            serde_json::to_string(&consolidated_schema()).unwrap(),
        )
        .unwrap();

        let tool = FilterSchemaTool::new(SchemaPaths::new(&input, &output));
        let mut store = crate::store::FsSchemaStore;
        let summary = tool
            .execute(
                &mut store,
                FilterSchemaInput {
                    session_id: "disk-session".to_string(),
                },
            )
            .unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            written["description"],
            json!("Serverless Workflow specification - workflow schema (ID-based workflows only)")
        );
        assert!(summary.contains(&output.display().to_string()));
    }
}
