use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::debug;

use super::models::{GdpDocument, LoadError};
use crate::models::Dataset;

/// Client for the published GDP data document
pub struct GdpClient {
    http_client: HttpClient,
    url: String,
}

impl GdpClient {
    pub const DEFAULT_URL: &'static str =
        "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

    /// Create a client for a custom URL
    pub fn with_url(url: String) -> Self {
        Self::with_http_client(HttpClient::new(), url)
    }

    /// Create a client around a preconfigured reqwest client (for testing)
    pub fn with_http_client(http_client: HttpClient, url: String) -> Self {
        Self { http_client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// GET the data document
    ///
    /// # Returns
    /// * `Ok(GdpDocument)` - Parsed document, records in published order
    /// * `Err(LoadError)` - Network failure, non-success status, or unparsable body
    pub async fn fetch_document(&self) -> Result<GdpDocument, LoadError> {
        debug!("GET {}", self.url);
        let response = self
            .http_client
            .get(&self.url)
            .headers(Self::create_headers())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {} returned {}", self.url, status);
            return Err(LoadError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let document: GdpDocument = serde_json::from_str(&body)?;
        Ok(document)
    }

    /// GET the data document and keep only its records
    pub async fn fetch_dataset(&self) -> Result<Dataset, LoadError> {
        let document = self.fetch_document().await?;
        if let Some(name) = &document.name {
            debug!("Dataset: {}", name);
        }
        if let (Some(from), Some(to)) = (&document.from_date, &document.to_date) {
            debug!("Covering {} to {}", from, to);
        }
        if let Some(source) = &document.source_name {
            debug!("Source: {}", source);
        }
        if let Some(description) = &document.description {
            debug!("Description: {}", description);
        }
        Ok(document.data)
    }
}


#[cfg(test)]
mod tests {
    use super::test_server::{local_client, serve_once};
    use super::*;

    #[tokio::test]
    async fn test_fetch_dataset() {
        let body = r#"{
            "name": "Gross Domestic Product",
            "source_name": "Federal Reserve Economic Data",
            "description": "Units: Billions of Dollars",
            "from_date": "1947-01-01",
            "to_date": "1947-04-01",
            "frequency": "quarterly",
            "data": [["1947-01-01", 243.1], ["1947-04-01", 246.3]]
        }"#;
        let url = serve_once("200 OK", body).await;
        let client = local_client(url);

        let dataset = client.fetch_dataset().await.unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].date, "1947-04-01");
        assert_eq!(dataset.records()[1].value, 246.3);
    }

    #[tokio::test]
    async fn test_not_found_is_http_status_error() {
        let url = serve_once("404 Not Found", "").await;
        let client = local_client(url);

        match client.fetch_dataset().await {
            Err(LoadError::HttpStatus(code)) => assert_eq!(code, 404),
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_data_is_parse_error() {
        let url = serve_once("200 OK", r#"{"name": "no data here"}"#).await;
        let client = local_client(url);
        assert!(matches!(client.fetch_dataset().await, Err(LoadError::Parse(_))));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let url = serve_once("200 OK", "{not json").await;
        let client = local_client(url);
        assert!(matches!(client.fetch_dataset().await, Err(LoadError::Parse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = local_client(format!("http://{}/GDP-data.json", addr));
        assert!(matches!(client.fetch_dataset().await, Err(LoadError::Network(_))));
    }
}
