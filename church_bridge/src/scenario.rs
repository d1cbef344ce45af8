//! Conformance scenario definitions.
//!
//! A scenario is pure data: an operation name, JSON arguments, an
//! optional named host function and the expected outcome. Scenarios
//! carry no evaluation logic.

use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of running one scenario, and the shape of its expectation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The operation produced this decoded value (`null` is absence).
    Value(Value),
    /// The operation failed with this stable error code.
    Error(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    pub operation: String,
    #[serde(default)]
    pub args: Vec<Value>,
    #[serde(default)]
    pub function: Option<String>,
    pub expected: Outcome,
}

/// On-disk fixture: the scenarios plus an optional frozen digest of
/// their canonical report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteFile {
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub expected_digest: Option<String>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum LoadError {
    /// The fixture could not be read.
    IoError(String),
    /// The fixture is not a valid suite (malformed, unknown fields).
    DeserializationError(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::IoError(msg) => write!(f, "IoError: {}", msg),
            LoadError::DeserializationError(msg) => {
                write!(f, "DeserializationError: {}", msg)
            }
        }
    }
}

impl Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::DeserializationError(err.to_string())
    }
}

/// Parse a suite from its JSON text.
pub fn parse_suite(json_str: &str) -> Result<SuiteFile, LoadError> {
    Ok(serde_json::from_str(json_str)?)
}

/// Read and parse a suite file.
pub fn load_suite(path: &Path) -> Result<SuiteFile, LoadError> {
    let content = fs::read_to_string(path)
        .map_err(|e| LoadError::IoError(format!("{}: {}", path.display(), e)))?;
    parse_suite(&content)
}
