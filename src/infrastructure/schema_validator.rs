use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

// Representation names and node ranges are left to the domain so that
// they surface as typed configuration/range errors.
static GRAPH_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/graph_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid graph schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile graph schema")
});

/// Validate a JSON graph document against the graph schema
pub fn validate_graph_document(document: &Value) -> Result<()> {
    match GRAPH_SCHEMA.validate(document) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "graph document validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}
