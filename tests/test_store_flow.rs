use mockito::Matcher;
use recipe_finder::view::{self, Action, Orientation};
use recipe_finder::{LoadStatus, RecipeStore, SearchForm, SpoonacularClient};
use std::sync::Arc;

const SEARCH_BODY: &str = r#"{
    "results": [
        {"id": 1, "title": "Pancakes", "image": "https://img/1.jpg"},
        {"id": 2, "title": "Waffles"}
    ],
    "offset": 0,
    "number": 2,
    "totalResults": 2
}"#;

const DETAILS_BODY: &str = r#"{
    "id": 2,
    "title": "Waffles",
    "image": null,
    "instructions": "Mix <b>well</b> and <i>serve</i>.",
    "extendedIngredients": [
        {"id": 20081, "original": "2 cups flour"},
        {"id": 1123, "original": "2 eggs"}
    ]
}"#;

// Mocks are removed when dropped, so they are handed back with the server
async fn server_with_recipes() -> (mockito::ServerGuard, Vec<mockito::Mock>) {
    let mut server = mockito::Server::new_async().await;
    let search = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::UrlEncoded("query".into(), "breakfast".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEARCH_BODY)
        .create_async()
        .await;
    let details = server
        .mock("GET", "/recipes/2/information")
        .match_query(Matcher::UrlEncoded("apiKey".into(), "test_key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DETAILS_BODY)
        .create_async()
        .await;
    let broken = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::UrlEncoded("query".into(), "broken".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<html>not json</html>")
        .create_async()
        .await;
    (server, vec![search, details, broken])
}

fn store_for(server: &mockito::ServerGuard) -> RecipeStore {
    let client = SpoonacularClient::with_base_url("test_key".to_string(), server.url());
    RecipeStore::new(Arc::new(client)).unwrap()
}

#[tokio::test]
async fn test_search_select_and_back() {
    let (server, _mocks) = server_with_recipes().await;
    let store = store_for(&server);
    let mut updates = store.subscribe();

    let form = SearchForm {
        query: "breakfast".to_string(),
        ..Default::default()
    };
    view::dispatch(&store, &form, Action::Submit);
    updates
        .wait_for(|s| s.search_status == LoadStatus::Loaded)
        .await
        .unwrap();

    let state = store.snapshot();
    assert_eq!(state.recipes.len(), 2);
    assert_eq!(state.recipes[0].title, "Pancakes");

    // Tap the second list entry
    let screen = view::render(&state, &form, Orientation::Portrait);
    let tapped = screen.actions()[2];
    assert_eq!(tapped, Action::Select(2));
    view::dispatch(&store, &form, tapped);
    updates
        .wait_for(|s| s.details_status == LoadStatus::Loaded)
        .await
        .unwrap();

    let state = store.snapshot();
    assert_eq!(state.selected.as_ref().map(|d| d.id), Some(2));
    assert_eq!(state.recipes.len(), 2);

    let text = view::text::render(&view::render(&state, &form, Orientation::Portrait));
    assert!(text.contains("Mix well and serve."));
    assert!(text.contains("- 2 cups flour"));
    assert!(!text.contains("Pancakes"));

    view::dispatch(&store, &form, Action::Back);
    let state = store.snapshot();
    assert!(state.selected.is_none());
    assert_eq!(state.recipes.len(), 2);
}

#[tokio::test]
async fn test_decode_failure_keeps_results_and_reports() {
    let (server, _mocks) = server_with_recipes().await;
    let store = store_for(&server);
    let mut updates = store.subscribe();

    store.search(SearchForm {
        query: "breakfast".to_string(),
        ..Default::default()
    }
    .to_params());
    updates
        .wait_for(|s| s.search_status == LoadStatus::Loaded)
        .await
        .unwrap();

    let form = SearchForm {
        query: "broken".to_string(),
        ..Default::default()
    };
    store.search(form.to_params());
    updates
        .wait_for(|s| matches!(s.search_status, LoadStatus::Failed(_)))
        .await
        .unwrap();

    let state = store.snapshot();
    assert_eq!(state.recipes.len(), 2);

    let text = view::text::render(&view::render(&state, &form, Orientation::Landscape));
    assert!(text.contains("! Search failed: Failed to decode response"));
    assert!(text.contains("Waffles"));
}

#[tokio::test]
async fn test_landscape_details_keeps_list_visible() {
    let (server, _mocks) = server_with_recipes().await;
    let store = store_for(&server);
    let mut updates = store.subscribe();
    let form = SearchForm {
        query: "breakfast".to_string(),
        ..Default::default()
    };

    view::dispatch(&store, &form, Action::Submit);
    updates
        .wait_for(|s| s.search_status == LoadStatus::Loaded)
        .await
        .unwrap();
    view::dispatch(&store, &form, Action::Select(2));
    updates
        .wait_for(|s| s.details_status == LoadStatus::Loaded)
        .await
        .unwrap();

    let state = store.snapshot();
    let landscape = view::render(&state, &form, Orientation::Landscape);
    assert_eq!(
        landscape.actions(),
        vec![Action::Select(1), Action::Select(2), Action::Back]
    );
    assert_eq!(store.snapshot(), state);
}
