pub mod chart_service;
pub mod export_service;
pub mod loader_service;
pub mod preview_service;
pub mod scale_service;
