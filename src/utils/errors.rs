use thiserror::Error;

use crate::api::gdp::LoadError;
use crate::services::chart_service::RenderError;

/// Any failure between fetching the dataset and drawing it
#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
