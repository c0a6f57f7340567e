mod spoonacular;

pub use spoonacular::{search_query, SpoonacularClient};

use crate::model::{RecipeDetails, SearchParams, SearchResponse};
use crate::FinderError;
use async_trait::async_trait;

/// Read-only access to a recipe database
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Search recipes; absent filters are left out of the request
    async fn search_recipes(&self, params: &SearchParams) -> Result<SearchResponse, FinderError>;

    /// Fetch the full record for one recipe
    async fn recipe_details(&self, id: i64) -> Result<RecipeDetails, FinderError>;
}
