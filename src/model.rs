use serde::{Deserialize, Serialize};

/// One entry of a search result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}

/// Full record for one recipe as delivered by the API
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    pub ingredients: Vec<String>,
    /// Cooking time in minutes, when the API knows it
    pub time: Option<u32>,
    pub servings: Option<u32>,
}

/// An ingredient line split into quantity, unit and name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: String,
    pub count: f64,
    pub unit: String,
    pub ingredient: String,
}

/// A bookmarked recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedRecipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
}
