use std::env;

use serde::Deserialize;
use serde::Serialize;

/// Where the pricing service lives.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PricingApiConfig {
    base_url: String,
}

impl PricingApiConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080/api/v1";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `PRICING_API_URL`, defaulting to a local service.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("PRICING_API_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for PricingApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_from_lookup() {
        let config = PricingApiConfig::from_lookup(|_| Some("https://prices.example.org".into()));
        assert_eq!(config.base_url(), "https://prices.example.org");

        let config = PricingApiConfig::from_lookup(|_| None);
        assert_eq!(config.base_url(), PricingApiConfig::DEFAULT_BASE_URL);
    }
}
