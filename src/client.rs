//! HTTP access to TheCocktailDB.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::builder::CocktailClientBuilder;
use crate::error::LookupError;
use crate::model::{DrinksResponse, Recipe};

const SEARCH_STATUS_MESSAGE: &str = "Failed to fetch cocktail data.";
const RANDOM_STATUS_MESSAGE: &str = "Failed to fetch random cocktail.";

/// Source of cocktail recipes, enabling fakes in tests.
#[async_trait]
pub trait CocktailSource: Send + Sync {
    /// First recipe whose name matches, or [`LookupError::NotFound`].
    async fn search_by_name(&self, name: &str) -> Result<Recipe, LookupError>;

    /// One randomly selected recipe.
    async fn random(&self) -> Result<Recipe, LookupError>;
}

/// [`CocktailSource`] backed by the public TheCocktailDB API.
#[derive(Debug, Clone)]
pub struct CocktailDbClient {
    client: Client,
    base_url: String,
}

impl CocktailDbClient {
    pub(crate) fn from_parts(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Start configuring a client.
    pub fn builder() -> CocktailClientBuilder {
        CocktailClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_drinks(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        status_message: &'static str,
    ) -> Result<DrinksResponse, LookupError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        debug!("{} responded with {}", url, status);

        if !status.is_success() {
            return Err(LookupError::Status {
                status,
                message: status_message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            LookupError::Malformed(format!("Unexpected response from cocktail service: {}", e))
        })
    }
}

#[async_trait]
impl CocktailSource for CocktailDbClient {
    async fn search_by_name(&self, name: &str) -> Result<Recipe, LookupError> {
        let drinks = self
            .get_drinks("search.php", &[("s", name)], SEARCH_STATUS_MESSAGE)
            .await?;

        drinks
            .into_first()
            .map(|drink| Recipe::from(&drink))
            .ok_or(LookupError::NotFound)
    }

    async fn random(&self) -> Result<Recipe, LookupError> {
        let drinks = self
            .get_drinks("random.php", &[], RANDOM_STATUS_MESSAGE)
            .await?;

        drinks
            .into_first()
            .map(|drink| Recipe::from(&drink))
            .ok_or_else(|| {
                LookupError::Malformed("Random cocktail response contained no drinks.".to_string())
            })
    }
}
