use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod models;
mod services;
mod utils;

use api::gdp::GdpClient;
use config::Config;
use models::{Page, CANVAS_ID};
use services::chart_service::ChartOptions;
use services::loader_service::{self, RenderTargets};
use services::{export_service, preview_service};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "gdp_bar_chart=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let config = Config::from_env();
    debug!("Config: {:?}", config);

    let options = ChartOptions::default();
    let mut page = Page::with_default_targets(options.title.clone());
    let client = GdpClient::with_url(config.data_url.clone());

    info!("Loading dataset from {}", client.url());
    let dataset =
        loader_service::load_and_render(&client, &mut page, &RenderTargets::default(), &options).await;

    if let Some(canvas) = page.canvas(CANVAS_ID) {
        debug!("#{} holds {} bars", CANVAS_ID, canvas.bar_count());
    }

    let html = export_service::render_html(&page);
    match tokio::fs::write(&config.output_path, html).await {
        Ok(()) => info!("Chart written to {}", config.output_path.display()),
        Err(e) => error!("Failed to write {}: {}", config.output_path.display(), e),
    }

    if let (Some(path), Some(dataset)) = (&config.preview_path, &dataset) {
        let size = (options.width as u32, options.height as u32);
        match preview_service::render_preview(dataset, size) {
            Ok(svg) => match tokio::fs::write(path, svg).await {
                Ok(()) => info!("Preview written to {}", path.display()),
                Err(e) => error!("Failed to write {}: {}", path.display(), e),
            },
            Err(e) => error!("{}", e),
        }
    }
}
