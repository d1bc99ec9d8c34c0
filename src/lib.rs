pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod ingredients;
pub mod model;
pub mod render;
pub mod view;

// Re-export main types for convenience
pub use builder::CocktailClientBuilder;
pub use client::{CocktailDbClient, CocktailSource};
pub use config::{FinderConfig, RenderMode};
pub use error::{FinderError, LookupError};
pub use ingredients::normalize_ingredients;
pub use model::{DrinkRecord, DrinksResponse, Recipe};
pub use render::{render_html, render_text};
pub use view::{DisplayRegion, RecipeLookupView, ViewState};

/// Look up the first cocktail matching `name` with a default client
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipe = cocktail_finder::search_cocktail("Margarita").await?;
/// println!("{}", recipe.name);
/// # Ok(())
/// # }
/// ```
pub async fn search_cocktail(name: &str) -> Result<Recipe, Box<dyn std::error::Error>> {
    let client = CocktailDbClient::builder().build()?;
    Ok(client.search_by_name(name).await?)
}

/// Fetch one random cocktail with a default client
pub async fn random_cocktail() -> Result<Recipe, Box<dyn std::error::Error>> {
    let client = CocktailDbClient::builder().build()?;
    Ok(client.random().await?)
}

/// Build a view whose client follows the given configuration
pub fn view_from_config(config: &FinderConfig) -> Result<RecipeLookupView, FinderError> {
    let client = CocktailDbClient::builder().with_config(config).build()?;
    Ok(RecipeLookupView::new(Box::new(client)))
}
