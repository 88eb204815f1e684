//! Environment configuration for the API client

/// Where the client finds its backend and the PDF blobs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Remote review API; `None` selects the built-in sample data
    pub api_base_url: Option<String>,
    /// Blob storage prefix joined with a document's storage reference
    pub storage_base_url: Option<String>,
}

impl ApiConfig {
    pub const API_BASE_URL_VAR: &'static str = "REVIEW_API_BASE_URL";
    pub const STORAGE_BASE_URL_VAR: &'static str = "REVIEW_STORAGE_BASE_URL";

    pub fn new(api_base_url: Option<String>, storage_base_url: Option<String>) -> Self {
        Self {
            api_base_url: normalize(api_base_url),
            storage_base_url: normalize(storage_base_url),
        }
    }

    /// Read both URLs from the environment
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(Self::API_BASE_URL_VAR).ok(),
            std::env::var(Self::STORAGE_BASE_URL_VAR).ok(),
        )
    }

    pub fn uses_mock_data(&self) -> bool {
        self.api_base_url.is_none()
    }
}

/// Blank counts as unset; trailing slashes are dropped so paths join cleanly
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
}
