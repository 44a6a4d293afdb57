use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main planner configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlannerConfig {
    /// Recipe API connection settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Search result presentation
    #[serde(default)]
    pub search: SearchConfig,
    /// Heuristics applied to fetched recipes
    #[serde(default)]
    pub recipe: RecipeConfig,
    /// Where likes are persisted
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Configuration for the recipe API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the recipe API, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Number of results shown per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Fallbacks used when the API does not report time or servings
#[derive(Debug, Deserialize, Clone)]
pub struct RecipeConfig {
    /// Servings assumed when the recipe does not state them
    #[serde(default = "default_servings")]
    pub default_servings: u32,
    /// Minutes added for each group of `ingredients_per_period` ingredients
    #[serde(default = "default_minutes_per_period")]
    pub minutes_per_period: u32,
    #[serde(default = "default_ingredients_per_period")]
    pub ingredients_per_period: u32,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            default_servings: default_servings(),
            minutes_per_period: default_minutes_per_period(),
            ingredients_per_period: default_ingredients_per_period(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the file-backed key/value store
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
    /// Key under which likes are stored
    #[serde(default = "default_likes_key")]
    pub likes_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            likes_key: default_likes_key(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://forkify-api.herokuapp.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> usize {
    10
}

fn default_servings() -> u32 {
    4
}

fn default_minutes_per_period() -> u32 {
    15
}

fn default_ingredients_per_period() -> u32 {
    3
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".recipe-planner")
}

fn default_likes_key() -> String {
    "likes".to_string()
}

impl PlannerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_PLANNER__ prefix
    /// 2. `recipe-planner.toml` in the current directory, or `path` when given
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_PLANNER__API__BASE_URL
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        load_config(path)
    }
}

/// Load configuration, see [`PlannerConfig::load`].
pub fn load_config(path: Option<&str>) -> Result<PlannerConfig, ConfigError> {
    let file = match path {
        // An explicitly requested file must exist
        Some(path) => File::with_name(path).required(true),
        None => File::with_name("recipe-planner").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPE_PLANNER__SEARCH__PAGE_SIZE
        .add_source(
            Environment::with_prefix("RECIPE_PLANNER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
