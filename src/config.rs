use std::path::PathBuf;

use crate::api::gdp::GdpClient;

const DEFAULT_OUTPUT: &str = "gdp-chart.html";

/// Runtime settings, read from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `GDP_DATA_URL`
    pub data_url: String,
    /// `GDP_CHART_OUTPUT`
    pub output_path: PathBuf,
    /// `GDP_CHART_PREVIEW`, no preview when unset
    pub preview_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: GdpClient::DEFAULT_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            preview_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            data_url: get("GDP_DATA_URL").unwrap_or(defaults.data_url),
            output_path: get("GDP_CHART_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            preview_path: get("GDP_CHART_PREVIEW").map(PathBuf::from),
        }
    }
}
