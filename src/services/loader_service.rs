use tracing::{error, info};

use crate::api::gdp::GdpClient;
use crate::models::{Dataset, Page};
use crate::services::chart_service::{self, ChartOptions};
use crate::utils::ChartError;

/// Canvas and tooltip element ids the chart is drawn into
#[derive(Debug, Clone)]
pub struct RenderTargets {
    pub canvas_id: String,
    pub tooltip_id: String,
}

impl Default for RenderTargets {
    fn default() -> Self {
        Self {
            canvas_id: crate::models::CANVAS_ID.to_string(),
            tooltip_id: crate::models::TOOLTIP_ID.to_string(),
        }
    }
}

/// Fetch the dataset and render it once
pub async fn try_load_and_render(
    client: &GdpClient,
    page: &mut Page,
    targets: &RenderTargets,
    options: &ChartOptions,
) -> Result<Dataset, ChartError> {
    let dataset = client.fetch_dataset().await?;
    info!("Data loaded.");
    chart_service::render(&dataset, page, &targets.canvas_id, &targets.tooltip_id, options)?;
    Ok(dataset)
}

/// Fetch the dataset and render it once, logging any failure instead of returning it.
///
/// On failure the canvas is left untouched.
pub async fn load_and_render(
    client: &GdpClient,
    page: &mut Page,
    targets: &RenderTargets,
    options: &ChartOptions,
) -> Option<Dataset> {
    match try_load_and_render(client, page, targets, options).await {
        Ok(dataset) => Some(dataset),
        Err(e) => {
            error!("Failed to load chart from {}: {}", client.url(), e);
            None
        }
    }
}
