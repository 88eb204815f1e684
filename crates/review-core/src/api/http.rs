//! Remote backend over HTTP

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use review_types::ExportFormat;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, ReviewError};
use crate::export::ExportBlob;

/// JSON client for the review API rooted at `base_url`
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ReviewError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        debug!("GET {}", endpoint);
        let response = self.client.get(self.url(endpoint)).send().await?;
        Ok(checked(response)?.json().await?)
    }

    pub(crate) async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", endpoint);
        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await?;
        Ok(checked(response)?.json().await?)
    }

    pub(crate) async fn get_blob(
        &self,
        endpoint: &str,
        format: ExportFormat,
    ) -> Result<ExportBlob> {
        debug!("GET {} (download)", endpoint);
        let response = self.client.get(self.url(endpoint)).send().await?;
        into_blob(checked(response)?, format).await
    }

    pub(crate) async fn post_for_blob<B>(
        &self,
        endpoint: &str,
        body: &B,
        format: ExportFormat,
    ) -> Result<ExportBlob>
    where
        B: Serialize + ?Sized,
    {
        debug!("POST {} (download)", endpoint);
        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await?;
        into_blob(checked(response)?, format).await
    }
}

fn checked(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ReviewError::api(status))
    }
}

/// Body bytes, typed by the response header or else by the requested format
async fn into_blob(response: Response, format: ExportFormat) -> Result<ExportBlob> {
    let mime_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| format.mime_type().to_string());
    let bytes = response.bytes().await?.to_vec();
    Ok(ExportBlob { mime_type, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let backend = HttpBackend::new(" https://review.example.com/ ").unwrap();
        assert_eq!(backend.base_url(), "https://review.example.com");
        assert_eq!(
            backend.url("/api/documents"),
            "https://review.example.com/api/documents"
        );
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        assert!(matches!(
            HttpBackend::new("review.example.com"),
            Err(ReviewError::InvalidUrl(_))
        ));
    }
}
