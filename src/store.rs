//! Application state store.
//!
//! Holds the latest search results and the selected recipe, publishes every
//! change through a `watch` channel and runs network calls on background tasks
//! tied to the store's lifetime.

use crate::client::RecipeApi;
use crate::model::{Recipe, RecipeDetails, SearchParams};
use crate::FinderError;
use log::{debug, error, info};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinSet;

/// Progress of the latest request of one kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Everything the view layer renders from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub recipes: Vec<Recipe>,
    pub selected: Option<RecipeDetails>,
    pub search_status: LoadStatus,
    pub details_status: LoadStatus,
}

impl AppState {
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }
}

struct Shared {
    api: Arc<dyn RecipeApi>,
    state: watch::Sender<AppState>,
    // Id of the latest request issued per operation; older responses are dropped
    search_seq: AtomicU64,
    details_seq: AtomicU64,
}

impl Shared {
    async fn run_search(&self, request: u64, params: SearchParams) {
        debug!("search #{} started: {:?}", request, params);
        let result = self.api.search_recipes(&params).await;

        self.state.send_if_modified(|state| {
            if self.search_seq.load(Ordering::SeqCst) != request {
                debug!("dropping stale search response #{}", request);
                return false;
            }
            match result {
                Ok(response) => {
                    info!("search #{} returned {} recipes", request, response.results.len());
                    state.recipes = response.results;
                    state.search_status = LoadStatus::Loaded;
                }
                Err(e) => {
                    error!("search #{} failed: {}", request, e);
                    state.search_status = LoadStatus::Failed(e.to_string());
                }
            }
            true
        });
    }

    async fn run_details(&self, request: u64, id: i64) {
        debug!("details #{} started for recipe {}", request, id);
        let result = self.api.recipe_details(id).await;

        self.state.send_if_modified(|state| {
            if self.details_seq.load(Ordering::SeqCst) != request {
                debug!("dropping stale details response #{}", request);
                return false;
            }
            match result {
                Ok(details) => {
                    info!("loaded details for recipe {}", details.id);
                    state.selected = Some(details);
                    state.details_status = LoadStatus::Loaded;
                }
                Err(e) => {
                    error!("details #{} for recipe {} failed: {}", request, id, e);
                    state.details_status = LoadStatus::Failed(e.to_string());
                }
            }
            true
        });
    }
}

pub struct RecipeStore {
    shared: Arc<Shared>,
    runtime: Handle,
    // Dropping the set aborts whatever is still in flight
    tasks: Mutex<JoinSet<()>>,
}

impl RecipeStore {
    /// Create a store that spawns onto the current tokio runtime
    pub fn new(api: Arc<dyn RecipeApi>) -> Result<Self, FinderError> {
        let runtime = Handle::try_current().map_err(|e| FinderError::RuntimeError(e.to_string()))?;
        Ok(Self::with_runtime(api, runtime))
    }

    /// Create a store that spawns onto the given runtime
    pub fn with_runtime(api: Arc<dyn RecipeApi>, runtime: Handle) -> Self {
        let (state, _) = watch::channel(AppState::default());
        RecipeStore {
            shared: Arc::new(Shared {
                api,
                state,
                search_seq: AtomicU64::new(0),
                details_seq: AtomicU64::new(0),
            }),
            runtime,
            tasks: Mutex::new(JoinSet::new()),
        }
    }

    /// Receiver that is notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.shared.state.subscribe()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> AppState {
        self.shared.state.borrow().clone()
    }

    /// Start a search. On success the result list is replaced wholesale; on
    /// failure it is kept and the error is reported through `search_status`.
    pub fn search(&self, params: SearchParams) {
        let mut request = 0;
        self.shared.state.send_modify(|state| {
            request = self.shared.search_seq.fetch_add(1, Ordering::SeqCst) + 1;
            state.search_status = LoadStatus::Loading;
        });

        let shared = Arc::clone(&self.shared);
        self.spawn(async move { shared.run_search(request, params).await });
    }

    /// Start loading one recipe's details. The result list is never touched.
    pub fn load_details(&self, id: i64) {
        let mut request = 0;
        self.shared.state.send_modify(|state| {
            request = self.shared.details_seq.fetch_add(1, Ordering::SeqCst) + 1;
            state.details_status = LoadStatus::Loading;
        });

        let shared = Arc::clone(&self.shared);
        self.spawn(async move { shared.run_details(request, id).await });
    }

    /// Drop the selection. Also discards any details response still in flight.
    pub fn clear_selection(&self) {
        self.shared.state.send_modify(|state| {
            self.shared.details_seq.fetch_add(1, Ordering::SeqCst);
            state.selected = None;
            state.details_status = LoadStatus::Idle;
        });
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = match self.tasks.lock() {
            Ok(tasks) => tasks,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Reap finished tasks so the set does not grow with every request
        while tasks.try_join_next().is_some() {}
        tasks.spawn_on(task, &self.runtime);
    }
}
