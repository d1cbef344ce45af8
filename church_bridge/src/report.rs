//! Canonical report serialization + SHA-256 digest.
//!
//! Runs that agree on every scenario produce byte-identical reports, so
//! the golden fixture can freeze one digest for the whole suite.
//!
//! Rules:
//!   - `encoding_version` is the first field
//!   - results keep fixture order
//!   - each result is `{"name": ..., "outcome": {"value"|"error": ...}}`
//!   - compact UTF-8 JSON, no whitespace

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use church_encodings::ENCODING_VERSION;

use crate::scenario::Outcome;

/// Outcome of one scenario within a run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub name: String,
    pub outcome: Outcome,
    pub passed: bool,
}

/// Canonical serialization of a run to UTF-8 JSON bytes.
pub fn canonical_serialize(results: &[ScenarioResult]) -> Vec<u8> {
    let obj = build_canonical_value(results);
    serde_json::to_string(&obj)
        .expect("canonical_serialize: JSON serialization failed")
        .into_bytes()
}

/// SHA-256 of the canonical serialization. Lowercase hex string.
pub fn canonical_hash(results: &[ScenarioResult]) -> String {
    let digest = Sha256::digest(canonical_serialize(results));
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

fn build_canonical_value(results: &[ScenarioResult]) -> Value {
    let entries: Vec<Value> = results
        .iter()
        .map(|r| {
            let mut outcome = Map::new();
            match &r.outcome {
                Outcome::Value(v) => outcome.insert("value".to_string(), v.clone()),
                Outcome::Error(code) => {
                    outcome.insert("error".to_string(), Value::String(code.clone()))
                }
            };

            let mut entry = Map::new();
            entry.insert("name".to_string(), Value::String(r.name.clone()));
            entry.insert("outcome".to_string(), Value::Object(outcome));
            Value::Object(entry)
        })
        .collect();

    let mut root = Map::new();
    root.insert(
        "encoding_version".to_string(),
        Value::Number(ENCODING_VERSION.into()),
    );
    root.insert("results".to_string(), Value::Array(entries));
    Value::Object(root)
}
