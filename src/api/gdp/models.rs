use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Dataset;

/// Body of the GDP data document.
///
/// Only `data` is required; the descriptive fields are kept when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GdpDocument {
    pub data: Dataset,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub from_date: Option<String>,
    #[serde(default)]
    pub to_date: Option<String>,
}

/// Errors raised while loading the dataset
#[derive(Debug, Error)]
pub enum LoadError {
    /// Request could not complete
    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),
    /// Non-success status code
    #[error("HTTP error {0}")]
    HttpStatus(u16),
    /// Body is not valid JSON or lacks the `data` field
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}
