use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ingredients::normalize_ingredients;

/// A cocktail recipe as shown to the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub name: String,
    pub instructions: String,
    /// One "<ingredient> - <measure>" entry per populated slot
    pub ingredients: Vec<String>,
    /// Thumbnail URL
    pub image: String,
}

/// One drink as returned by TheCocktailDB
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrinkRecord {
    #[serde(rename = "strDrink", default)]
    pub name: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strDrinkThumb", default)]
    pub thumbnail: Option<String>,
    /// Every other field, including the numbered ingredient and measure keys
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl DrinkRecord {
    /// String value of a field, `None` when absent, null or not a string
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// Envelope shared by the search and random endpoints
#[derive(Debug, Default, Deserialize)]
pub struct DrinksResponse {
    #[serde(default)]
    pub drinks: Option<Vec<DrinkRecord>>,
}

impl DrinksResponse {
    /// Consume the envelope, keeping only the first drink
    pub fn into_first(self) -> Option<DrinkRecord> {
        self.drinks.and_then(|drinks| drinks.into_iter().next())
    }
}

impl From<&DrinkRecord> for Recipe {
    fn from(drink: &DrinkRecord) -> Self {
        Recipe {
            name: drink.name.clone().unwrap_or_default(),
            instructions: drink.instructions.clone().unwrap_or_default(),
            ingredients: normalize_ingredients(drink),
            image: drink.thumbnail.clone().unwrap_or_default(),
        }
    }
}
