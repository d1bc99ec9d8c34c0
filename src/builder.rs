use std::time::Duration;

use reqwest::Client;

use crate::client::CocktailDbClient;
use crate::config::{FinderConfig, DEFAULT_BASE_URL};
use crate::error::FinderError;

/// Builder for configuring a [`CocktailDbClient`]
#[derive(Debug, Default)]
pub struct CocktailClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl CocktailClientBuilder {
    /// Point the client at another deployment of the API
    ///
    /// # Example
    /// ```
    /// use cocktail_finder::CocktailDbClient;
    ///
    /// let builder = CocktailDbClient::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use cocktail_finder::CocktailDbClient;
    /// use std::time::Duration;
    ///
    /// let builder = CocktailDbClient::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Apply every setting from a loaded configuration
    pub fn with_config(self, config: &FinderConfig) -> Self {
        self.base_url(config.base_url.clone())
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - The base URL is empty or not http(s)
    /// - The underlying HTTP client cannot be created
    pub fn build(self) -> Result<CocktailDbClient, FinderError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FinderError::InvalidBaseUrl(base_url));
        }

        let mut client = Client::builder().timeout(self.timeout.unwrap_or(Duration::from_secs(30)));
        if let Some(agent) = self.user_agent {
            client = client.user_agent(agent);
        }

        Ok(CocktailDbClient::from_parts(client.build()?, base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = CocktailClientBuilder::default().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = CocktailClientBuilder::default()
            .base_url("http://localhost:1234/api/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/api");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let result = CocktailClientBuilder::default()
            .base_url("ftp://example.com")
            .build();
        assert!(matches!(result, Err(FinderError::InvalidBaseUrl(_))));

        let result = CocktailClientBuilder::default().base_url("").build();
        assert!(matches!(result, Err(FinderError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_with_config() {
        let config = FinderConfig {
            base_url: "http://127.0.0.1:9000".to_string(),
            ..Default::default()
        };
        let client = CocktailClientBuilder::default()
            .with_config(&config)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
    }
}
