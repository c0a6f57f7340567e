use crate::client::RecipeApi;
use crate::config::FinderConfig;
use crate::model::{RecipeDetails, SearchParams, SearchResponse};
use crate::FinderError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";
const DEFAULT_PAGE_SIZE: u32 = 10;

pub struct SpoonacularClient {
    client: Client,
    api_key: String,
    base_url: String,
    page_size: u32,
}

impl SpoonacularClient {
    /// Create a client from configuration
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(FinderError::MissingApiKey)?;

        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(SpoonacularClient {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        })
    }

    /// Create a client against the public API with default settings
    pub fn with_api_key(api_key: String) -> Self {
        SpoonacularClient {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        SpoonacularClient {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, FinderError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} {:?}", url, redacted(query));

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FinderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Query parameters for `GET /recipes/complexSearch`, in request order
pub fn search_query(
    params: &SearchParams,
    api_key: &str,
    page_size: u32,
) -> Vec<(&'static str, String)> {
    let mut query = vec![("apiKey", api_key.to_string())];

    let filters = [
        ("query", params.query.clone()),
        ("includeIngredients", params.ingredients.clone()),
        ("cuisine", params.cuisine.clone()),
        ("diet", params.diet.clone()),
        ("maxCalories", params.max_calories.map(|c| c.to_string())),
    ];
    query.extend(
        filters
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v))),
    );

    query.push(("number", page_size.to_string()));
    query.push(("addRecipeInformation", "true".to_string()));
    query.push(("instructionsRequired", "true".to_string()));
    query
}

fn redacted(query: &[(&'static str, String)]) -> Vec<(&'static str, String)> {
    query
        .iter()
        .map(|(name, value)| {
            if *name == "apiKey" {
                (*name, "***".to_string())
            } else {
                (*name, value.clone())
            }
        })
        .collect()
}

#[async_trait]
impl RecipeApi for SpoonacularClient {
    async fn search_recipes(&self, params: &SearchParams) -> Result<SearchResponse, FinderError> {
        let query = search_query(params, &self.api_key, self.page_size);
        let response: SearchResponse = self.get_json("recipes/complexSearch", &query).await?;
        debug!(
            "search returned {} of {} results",
            response.results.len(),
            response.total_results
        );
        Ok(response)
    }

    async fn recipe_details(&self, id: i64) -> Result<RecipeDetails, FinderError> {
        let query = [("apiKey", self.api_key.clone())];
        self.get_json(&format!("recipes/{}/information", id), &query)
            .await
    }
}
