use crate::auth::Session;
use crate::store::Repository;
use shared::error::AppResult;
use std::sync::Arc;
use storefront_client::ClientConfig;

/// Storefront configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | BACKEND_URL | http://localhost:54321 | Hosted backend base URL |
/// | BACKEND_API_KEY | (empty) | Public API key sent with every request |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Log filter |
/// | LOG_DIR | (unset) | Directory for daily rolling log files |
/// | REQUEST_TIMEOUT_SECS | 30 | Backend request timeout |
/// | UPI_PAYEE_ADDRESS | canteen@upi | UPI virtual payment address |
/// | UPI_PAYEE_NAME | Campus Canteen | Payee name shown in UPI apps |
///
/// # Example
///
/// ```ignore
/// BACKEND_URL=https://xyz.example.co LOG_LEVEL=debug cargo run -p storefront
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Hosted backend base URL
    pub backend_url: String,
    /// Public API key of the backend project
    pub backend_api_key: String,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub request_timeout_secs: u64,
    pub upi: UpiConfig,
}

/// Payee used to build UPI payment links at checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpiConfig {
    pub payee_address: String,
    pub payee_name: String,
    /// ISO currency code
    pub currency: String,
}

impl Default for UpiConfig {
    fn default() -> Self {
        Self {
            payee_address: "canteen@upi".into(),
            payee_name: "Campus Canteen".into(),
            currency: "INR".into(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let upi_default = UpiConfig::default();
        Self {
            backend_url: std::env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:54321".into()),
            backend_api_key: std::env::var("BACKEND_API_KEY").unwrap_or_default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30),
            upi: UpiConfig {
                payee_address: std::env::var("UPI_PAYEE_ADDRESS")
                    .unwrap_or(upi_default.payee_address),
                payee_name: std::env::var("UPI_PAYEE_NAME").unwrap_or(upi_default.payee_name),
                currency: upi_default.currency,
            },
        }
    }

    /// Environment config pointed at another backend
    pub fn with_overrides(
        backend_url: impl Into<String>,
        backend_api_key: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.backend_url = backend_url.into();
        config.backend_api_key = backend_api_key.into();
        config
    }

    /// Backend connection settings, acting as the session's user when given
    ///
    /// Without a session (or a session without a token) requests run with
    /// the public API key, so row level security treats them as anonymous.
    pub fn client_config(&self, session: Option<&Session>) -> ClientConfig {
        let config = ClientConfig::new(&self.backend_url, &self.backend_api_key)
            .with_timeout(self.request_timeout_secs);
        match session.and_then(|s| s.access_token.as_deref()) {
            Some(token) => config.with_access_token(token),
            None => config,
        }
    }

    /// Repository over the hosted backend for one session
    pub fn backend_repository(&self, session: Option<&Session>) -> AppResult<Repository> {
        let store = self.client_config(session).build_rest_store()?;
        Ok(Repository::new(Arc::new(store)))
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides("http://backend.test", "anon-key");
        assert_eq!(config.backend_url, "http://backend.test");
        assert_eq!(config.backend_api_key, "anon-key");
        assert_eq!(config.upi.currency, "INR");
    }

    #[test]
    fn test_client_config_uses_session_token() {
        let config = Config::with_overrides("http://backend.test", "anon-key");

        let anonymous = config.client_config(None);
        assert_eq!(anonymous.api_key, "anon-key");
        assert_eq!(anonymous.access_token, None);

        let session = Session::new(Uuid::new_v4()).with_access_token("user-jwt");
        let signed_in = config.client_config(Some(&session));
        assert_eq!(signed_in.access_token.as_deref(), Some("user-jwt"));
        assert_eq!(signed_in.timeout, config.request_timeout_secs);

        let tokenless = Session::new(Uuid::new_v4());
        assert_eq!(config.client_config(Some(&tokenless)).access_token, None);
    }

    #[test]
    fn test_backend_repository_rejects_bad_url() {
        let config = Config::with_overrides("not a url", "anon-key");
        assert!(config.backend_repository(None).is_err());
        assert!(Config::with_overrides("http://backend.test", "k")
            .backend_repository(None)
            .is_ok());
    }

    #[test]
    fn test_environment_flags() {
        let mut config = Config::with_overrides("http://backend.test", "");
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
