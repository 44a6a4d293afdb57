use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::fetchers::RecipeApi;
use crate::model::{RecipeDetail, RecipeSummary};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// HTTP client for a forkify-style recipe API
pub struct RequestFetcher {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    recipes: Vec<ApiSummary>,
}

#[derive(Debug, Deserialize)]
struct ApiSummary {
    recipe_id: String,
    title: String,
    publisher: String,
    image_url: String,
}

#[derive(Debug, Deserialize)]
struct RecipeResponse {
    recipe: ApiRecipe,
}

#[derive(Debug, Deserialize)]
struct ApiRecipe {
    recipe_id: String,
    title: String,
    publisher: String,
    image_url: String,
    #[serde(default)]
    source_url: String,
    ingredients: Vec<String>,
    #[serde(default)]
    cooking_time: Option<u32>,
    #[serde(default)]
    servings: Option<u32>,
}

impl From<ApiSummary> for RecipeSummary {
    fn from(s: ApiSummary) -> Self {
        RecipeSummary {
            id: s.recipe_id,
            title: s.title,
            author: s.publisher,
            img: s.image_url,
        }
    }
}

impl From<ApiRecipe> for RecipeDetail {
    fn from(r: ApiRecipe) -> Self {
        RecipeDetail {
            id: r.recipe_id,
            title: r.title,
            author: r.publisher,
            img: r.image_url,
            url: r.source_url,
            ingredients: r.ingredients,
            time: r.cooking_time,
            servings: r.servings.filter(|s| *s > 0),
        }
    }
}

impl RequestFetcher {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-planner/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a fetcher from the `[api]` configuration section
    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        Self::new(config.base_url.clone(), Some(config.timeout()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        debug!("{}: {}", path, body);

        // The API reports lookup failures as {"error": "..."} with a 200 status
        if let Some(error) = body.get("error").and_then(Value::as_str) {
            return Err(FetchError::Malformed(error.to_string()));
        }

        serde_json::from_value(body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl RecipeApi for RequestFetcher {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError> {
        let response: SearchResponse = self.get_json("/api/search", &[("q", query)]).await?;
        Ok(response.recipes.into_iter().map(RecipeSummary::from).collect())
    }

    async fn recipe(&self, id: &str) -> Result<RecipeDetail, FetchError> {
        let response: RecipeResponse = self.get_json("/api/get", &[("rId", id)]).await?;
        Ok(response.recipe.into())
    }
}
