pub mod client;
pub mod models;

pub use client::GdpClient;
pub use models::LoadError;
