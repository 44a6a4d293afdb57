pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetchers;
pub mod ingredients;
pub mod model;
pub mod models;
pub mod render;
pub mod state;
pub mod storage;

pub use config::PlannerConfig;
pub use controller::{Action, Controller};
pub use error::{FetchError, PlannerError};
pub use fetchers::{RecipeApi, RequestFetcher};
pub use model::{LikedRecipe, ParsedIngredient, RecipeDetail, RecipeSummary, ShoppingListItem};
pub use models::{Likes, Recipe, Search, Servings, ShoppingList};
pub use render::{LoadingTarget, Render, TerminalRenderer};
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
