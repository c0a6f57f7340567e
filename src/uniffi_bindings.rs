//! UniFFI bindings for recipe-finder
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! The exported `RecipeFinder` object owns its own tokio runtime, so native callers
//! never deal with async Rust.

use std::fmt;
use std::sync::Arc;

use crate::client::{RecipeApi, SpoonacularClient};
use crate::config::FinderConfig;
use crate::store::{AppState, LoadStatus, RecipeStore};
use crate::view::{self, Orientation, SearchForm};
use crate::{FinderError, Ingredient, Recipe, RecipeDetails};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible search result entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            id: recipe.id,
            title: recipe.title,
            image: recipe.image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub id: i64,
    pub original: String,
}

impl From<Ingredient> for FfiIngredient {
    fn from(ingredient: Ingredient) -> Self {
        FfiIngredient {
            id: ingredient.id,
            original: ingredient.original,
        }
    }
}

/// FFI-compatible recipe details
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeDetails {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    /// Instructions as received, markup included
    pub instructions: Option<String>,
    /// Instructions ready for display, or the fallback text
    pub instructions_text: String,
    pub ingredients: Vec<FfiIngredient>,
}

impl From<RecipeDetails> for FfiRecipeDetails {
    fn from(details: RecipeDetails) -> Self {
        let instructions_text = view::instructions_text(details.instructions.as_deref());
        FfiRecipeDetails {
            id: details.id,
            title: details.title,
            image: details.image,
            instructions: details.instructions,
            instructions_text,
            ingredients: details
                .extended_ingredients
                .into_iter()
                .map(FfiIngredient::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiLoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed { message: String },
}

impl From<LoadStatus> for FfiLoadStatus {
    fn from(status: LoadStatus) -> Self {
        match status {
            LoadStatus::Idle => FfiLoadStatus::Idle,
            LoadStatus::Loading => FfiLoadStatus::Loading,
            LoadStatus::Loaded => FfiLoadStatus::Loaded,
            LoadStatus::Failed(message) => FfiLoadStatus::Failed { message },
        }
    }
}

/// Snapshot of the store for native rendering
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiAppState {
    pub recipes: Vec<FfiRecipe>,
    pub selected: Option<FfiRecipeDetails>,
    pub search_status: FfiLoadStatus,
    pub details_status: FfiLoadStatus,
}

impl From<AppState> for FfiAppState {
    fn from(state: AppState) -> Self {
        FfiAppState {
            recipes: state.recipes.into_iter().map(FfiRecipe::from).collect(),
            selected: state.selected.map(FfiRecipeDetails::from),
            search_status: state.search_status.into(),
            details_status: state.details_status.into(),
        }
    }
}

/// Raw form input, normalized on the Rust side
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiSearchForm {
    pub query: String,
    pub ingredients: String,
    pub cuisine: String,
    pub diet: String,
    pub max_calories: String,
}

impl From<FfiSearchForm> for SearchForm {
    fn from(form: FfiSearchForm) -> Self {
        SearchForm {
            query: form.query,
            ingredients: form.ingredients,
            cuisine: form.cuisine,
            diet: form.diet,
            max_calories: form.max_calories,
        }
    }
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiOrientation {
    Portrait,
    Landscape,
}

impl From<FfiOrientation> for Orientation {
    fn from(orientation: FfiOrientation) -> Self {
        match orientation {
            FfiOrientation::Portrait => Orientation::Portrait,
            FfiOrientation::Landscape => Orientation::Landscape,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiFinderError {
    /// Network failure or timeout
    FetchError { message: String },
    /// Server answered with an error status
    StatusError { status: u16, message: String },
    /// Response did not match the expected shape
    DecodeError { message: String },
    /// Configuration error, including a missing API key
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiFinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiFinderError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiFinderError::StatusError { status, message } => {
                write!(f, "Status {}: {}", status, message)
            }
            FfiFinderError::DecodeError { message } => write!(f, "Decode error: {}", message),
            FfiFinderError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiFinderError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiFinderError {}

impl From<FinderError> for FfiFinderError {
    fn from(err: FinderError) -> Self {
        match err {
            FinderError::FetchError(e) => FfiFinderError::FetchError {
                message: e.to_string(),
            },
            FinderError::Status { status, body } => FfiFinderError::StatusError {
                status,
                message: body,
            },
            FinderError::DecodeError(e) => FfiFinderError::DecodeError {
                message: e.to_string(),
            },
            FinderError::ConfigError(e) => FfiFinderError::ConfigError {
                message: e.to_string(),
            },
            e @ FinderError::MissingApiKey => FfiFinderError::ConfigError {
                message: e.to_string(),
            },
            FinderError::RuntimeError(message) => FfiFinderError::RuntimeError { message },
        }
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiFinderError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiFinderError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

fn client_for_key(api_key: String) -> Result<SpoonacularClient, FfiFinderError> {
    let config = FinderConfig {
        api_key: Some(api_key),
        ..Default::default()
    };
    Ok(SpoonacularClient::new(&config)?)
}

/// Stateful handle used by the app's screens.
///
/// `search` and `load_details` return immediately; poll `state()` (or re-read it
/// on a UI tick) to pick up results.
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct RecipeFinder {
    // Declared before the runtime so pending tasks are aborted first
    store: RecipeStore,
    // Only held to keep the store's worker threads alive
    _runtime: tokio::runtime::Runtime,
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl RecipeFinder {
    /// Create a finder for the public API with the given key
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn new(api_key: String) -> Result<Arc<Self>, FfiFinderError> {
        let client = client_for_key(api_key)?;
        Self::with_client(Arc::new(client))
    }

    /// Create a finder from `config.toml` / `RECIPE_FINDER__*` variables
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn from_config() -> Result<Arc<Self>, FfiFinderError> {
        let config = FinderConfig::load().map_err(FinderError::from)?;
        let client = SpoonacularClient::new(&config)?;
        Self::with_client(Arc::new(client))
    }

    pub fn search(&self, form: FfiSearchForm) {
        self.store.search(SearchForm::from(form).to_params());
    }

    pub fn load_details(&self, id: i64) {
        self.store.load_details(id);
    }

    pub fn clear_selection(&self) {
        self.store.clear_selection();
    }

    pub fn state(&self) -> FfiAppState {
        self.store.snapshot().into()
    }

    /// Plain-text layout of the current state, mostly for debugging shells
    pub fn render_text(&self, form: FfiSearchForm, orientation: FfiOrientation) -> String {
        let node = view::render(
            &self.store.snapshot(),
            &SearchForm::from(form),
            orientation.into(),
        );
        view::text::render(&node)
    }
}

impl RecipeFinder {
    pub fn with_client(api: Arc<dyn RecipeApi>) -> Result<Arc<Self>, FfiFinderError> {
        let runtime = create_runtime()?;
        let store = RecipeStore::with_runtime(api, runtime.handle().clone());
        Ok(Arc::new(RecipeFinder {
            store,
            _runtime: runtime,
        }))
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Arc<Self>, FfiFinderError> {
        Self::with_client(Arc::new(SpoonacularClient::with_base_url(api_key, base_url)))
    }
}

/// One-shot search without a store
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn search_recipes(
    api_key: String,
    form: FfiSearchForm,
) -> Result<Vec<FfiRecipe>, FfiFinderError> {
    let client = client_for_key(api_key)?;
    let params = SearchForm::from(form).to_params();
    let rt = create_runtime()?;
    let response = rt.block_on(async { client.search_recipes(&params).await })?;
    Ok(response.results.into_iter().map(FfiRecipe::from).collect())
}

/// One-shot details fetch without a store
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_recipe_details(api_key: String, id: i64) -> Result<FfiRecipeDetails, FfiFinderError> {
    let client = client_for_key(api_key)?;
    let rt = create_runtime()?;
    let details = rt.block_on(async { client.recipe_details(id).await })?;
    Ok(details.into())
}

/// Remove markup tags from recipe text
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn strip_tags(text: String) -> String {
    view::strip_tags(&text)
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
