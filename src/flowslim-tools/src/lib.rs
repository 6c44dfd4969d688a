//! Framework and implementation for the schema-narrowing tool.

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use flowslim_conf::SchemaPaths;

pub mod filter;
pub mod report;
pub mod stats;
pub mod store;
pub mod testing;
pub mod tools;
mod util;

pub use store::{FsSchemaStore, SchemaStore, StoreError};
pub use tools::filter_schema::FilterSchemaTool;
use util::derive_schema;

/// A tool that can be invoked by an orchestrating agent.
pub trait ToolDefinition {
    /// The input type for this tool.
    type Input: JsonSchema + DeserializeOwned;

    /// The name of the tool.
    fn name(&self) -> &'static str;

    /// A description of the tool, for the orchestrator.
    fn description(&self) -> &'static str;

    /// Execute the tool against the given store with the given input.
    fn execute(
        &self,
        store: &mut dyn SchemaStore,
        input: Self::Input,
    ) -> Result<String, anyhow::Error>;

    /// Derive the JSON schema for this tool's input type. Default
    /// implementation uses the derive_schema utility.
    fn input_schema(&self) -> Value {
        derive_schema::<Self::Input>()
    }
}

/// A type-erased tool definition for working with heterogeneous collections of
/// tools.
pub struct ErasedToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
    pub func: Box<dyn Fn(&mut dyn SchemaStore, Value) -> Result<String, anyhow::Error>>,
}

impl<T: ToolDefinition + 'static> From<T> for ErasedToolDefinition {
    fn from(tool: T) -> Self {
        ErasedToolDefinition {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            input_schema: tool.input_schema(),
            func: Box::new(move |store, input| {
                let typed_input: T::Input = serde_json::from_value(input)?;
                tool.execute(store, typed_input)
            }),
        }
    }
}

/// Invoke a tool, turning any failure into a descriptive string.
///
/// This is the invocation boundary: malformed arguments, missing input
/// files and everything else come back as an `error:`-prefixed string
/// rather than an error value. A failed run is simply re-invoked by the
/// caller, there are no retries here.
pub fn dispatch(tool: &ErasedToolDefinition, store: &mut dyn SchemaStore, args: Value) -> String {
    match (tool.func)(store, args) {
        Ok(output) => output,
        Err(err) => format!("error: {err:#}"),
    }
}

pub fn builtin_tools(paths: SchemaPaths) -> Vec<ErasedToolDefinition> {
    vec![FilterSchemaTool::new(paths).into()]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::MemoryStore;

    #[test]
    fn test_builtin_tools_expose_filter_schema() {
        let tools = builtin_tools(SchemaPaths::default());
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "filter_schema");
        assert!(!tools[0].description.is_empty());
        assert!(tools[0].input_schema["properties"]["session_id"].is_object());
    }

    #[test]
    fn test_dispatch_reports_malformed_arguments() {
        let tools = builtin_tools(SchemaPaths::default());
        let mut store = MemoryStore::new();

        let output = dispatch(&tools[0], &mut store, json!({"session_id": 42}));
        assert!(output.starts_with("error: "));
    }

    #[test]
    fn test_dispatch_reports_missing_input_file() {
        let tools = builtin_tools(SchemaPaths::new("nope/in.json", "nope/out.json"));
        let mut store = MemoryStore::new();

        let output = dispatch(&tools[0], &mut store, json!({"session_id": "s-1"}));
        assert!(output.starts_with("error: "));
        assert!(output.contains("nope/in.json"));
    }

    #[test]
    fn test_dispatch_returns_report_on_success() {
        let paths = SchemaPaths::new("in.json", "out.json");
        let mut store = MemoryStore::new().with_file(
            "in.json",
            json!({"properties": {"id": {"type": "string"}}}),
        );

        let tools = builtin_tools(paths);
        let output = dispatch(&tools[0], &mut store, json!({"session_id": "s-1"}));
        assert!(output.contains("Token count reduction"));
    }
}
