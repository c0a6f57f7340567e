//! Recipe search client for the Spoonacular API.
//!
//! The crate is the portable core of a recipe finder app:
//! - [`client`] talks to the remote API
//! - [`store`] holds the observable application state
//! - [`view`] lays that state out for portrait or landscape screens
//!
//! Mobile shells use the UniFFI bindings (`uniffi` feature); the
//! `recipe-finder` binary drives the same pieces from a terminal.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod uniffi_bindings;
pub mod view;

pub use client::{RecipeApi, SpoonacularClient};
pub use config::FinderConfig;
pub use error::FinderError;
pub use model::{Ingredient, Recipe, RecipeDetails, SearchParams, SearchResponse};
pub use store::{AppState, LoadStatus, RecipeStore};
pub use view::{Action, Node, Orientation, SearchForm};
