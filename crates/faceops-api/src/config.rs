use crate::error::ApiError;
use crate::pagination::DEFAULT_PAGE_SIZE;

const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";
const DEFAULT_INTERRUPT_DELAY_SECS: u64 = 60;

/// Client configuration, loaded from environment variables and passed into
/// [`crate::ApiClient::new`]. Nothing reads the environment after startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bearer token for the `Authorization` header.
    pub api_key: String,
    /// Base URL of the API (default: <http://localhost:3000/api/v1>).
    pub base_url: String,
    /// Page size for offset/limit pagination.
    pub page_size: usize,
    /// Seconds to wait before exiting after a manual interrupt. Throttles
    /// rapid re-invocation after an accidental cancel.
    pub interrupt_delay_secs: u64,
}

impl ApiConfig {
    /// Load configuration from `FACEOPS_*` environment variables.
    ///
    /// `FACEOPS_API_KEY` is required; everything else has a default.
    pub fn from_env() -> Result<Self, ApiError> {
        let api_key = std::env::var("FACEOPS_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ApiError::MissingApiKey)?;

        Ok(Self {
            api_key,
            base_url: std::env::var("FACEOPS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            page_size: env_usize("FACEOPS_PAGE_SIZE", DEFAULT_PAGE_SIZE).max(1),
            interrupt_delay_secs: env_u64(
                "FACEOPS_INTERRUPT_DELAY_SECS",
                DEFAULT_INTERRUPT_DELAY_SECS,
            ),
        })
    }

    /// Config with the given key and every other field at its default.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            interrupt_delay_secs: DEFAULT_INTERRUPT_DELAY_SECS,
        }
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_helpers_fall_back_on_missing_or_bad_values() {
        std::env::remove_var("FACEOPS_TEST_UNSET");
        assert_eq!(env_usize("FACEOPS_TEST_UNSET", 100), 100);

        std::env::set_var("FACEOPS_TEST_BAD_U64", "not a number");
        assert_eq!(env_u64("FACEOPS_TEST_BAD_U64", 60), 60);

        std::env::set_var("FACEOPS_TEST_GOOD_USIZE", "250");
        assert_eq!(env_usize("FACEOPS_TEST_GOOD_USIZE", 100), 250);
    }

    #[test]
    fn test_with_api_key_defaults() {
        let config = ApiConfig::with_api_key("k");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.interrupt_delay_secs, 60);
    }
}
