use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// TheCocktailDB v1 API using the public test key
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// How the terminal front-end draws the view
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Plain text for the terminal (default)
    #[default]
    Text,
    /// HTML fragment mirroring the web page
    Html,
}

/// Main finder configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct FinderConfig {
    /// Base URL of the cocktail service, without trailing endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub render: RenderMode,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            render: RenderMode::default(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("cocktail-finder/{}", env!("CARGO_PKG_VERSION"))
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`] for the lookup order.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with COCKTAIL__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: COCKTAIL__BASE_URL, COCKTAIL__RENDER=html
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("COCKTAIL")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
