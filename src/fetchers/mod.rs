mod request;

pub use request::RequestFetcher;

use crate::error::FetchError;
use crate::model::{RecipeDetail, RecipeSummary};
use async_trait::async_trait;

/// Source of search results and recipe details
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Search recipes matching `query`, in the order the API ranks them
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError>;

    /// Fetch the full record of one recipe
    async fn recipe(&self, id: &str) -> Result<RecipeDetail, FetchError>;
}
