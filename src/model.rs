use serde::{Deserialize, Serialize};

/// Summary record returned by a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub original: String,
}

/// Full record for one recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Raw text, may contain HTML markup
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
}

/// Body of `GET /recipes/complexSearch`.
///
/// The pagination fields are decoded but nothing in this crate consumes them yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<Recipe>,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Filters for one search. `None` means the parameter is left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: Option<String>,
    pub ingredients: Option<String>,
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub max_calories: Option<i32>,
}

impl SearchParams {
    /// Build parameters from raw form input.
    ///
    /// Blank text fields become `None`. The calorie field is parsed as an
    /// integer exactly as typed; anything unparseable, including surrounding
    /// whitespace, is dropped rather than reported.
    pub fn from_input(
        query: &str,
        ingredients: &str,
        cuisine: &str,
        diet: &str,
        max_calories: &str,
    ) -> Self {
        SearchParams {
            query: non_blank(query),
            ingredients: non_blank(ingredients),
            cuisine: non_blank(cuisine),
            diet: non_blank(diet),
            max_calories: max_calories.parse().ok(),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
