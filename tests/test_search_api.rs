use mockito::Matcher;
use recipe_finder::{RecipeApi, SearchForm, SearchParams, SpoonacularClient};

const SEARCH_BODY: &str = r#"{
    "results": [
        {"id": 654959, "title": "Pasta With Tuna", "image": "https://img.spoonacular.com/recipes/654959-312x231.jpg", "imageType": "jpg"},
        {"id": 511728, "title": "Pasta Margherita", "image": "https://img.spoonacular.com/recipes/511728-312x231.jpg"},
        {"id": 654812, "title": "Pasta and Seafood"}
    ],
    "offset": 0,
    "number": 10,
    "totalResults": 264
}"#;

#[tokio::test]
async fn test_query_only_sends_fixed_flags() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Exact(
            "apiKey=test_key&query=pasta&number=10&addRecipeInformation=true&instructionsRequired=true"
                .to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEARCH_BODY)
        .create_async()
        .await;

    let form = SearchForm {
        query: "pasta".to_string(),
        ingredients: "  ".to_string(),
        cuisine: String::new(),
        diet: "\t".to_string(),
        max_calories: "lots".to_string(),
    };

    let client = SpoonacularClient::with_base_url("test_key".to_string(), server.url());
    let response = client.search_recipes(&form.to_params()).await.unwrap();

    let titles: Vec<_> = response.results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Pasta With Tuna", "Pasta Margherita", "Pasta and Seafood"]
    );
    assert_eq!(response.results[2].image, None);
    assert_eq!(response.total_results, 264);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_all_filters_are_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apiKey".into(), "test_key".into()),
            Matcher::UrlEncoded("query".into(), "curry".into()),
            Matcher::UrlEncoded("includeIngredients".into(), "chicken, rice".into()),
            Matcher::UrlEncoded("cuisine".into(), "indian".into()),
            Matcher::UrlEncoded("diet".into(), "gluten free".into()),
            Matcher::UrlEncoded("maxCalories".into(), "650".into()),
            Matcher::UrlEncoded("number".into(), "10".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [], "offset": 0, "number": 0, "totalResults": 0}"#)
        .create_async()
        .await;

    let params = SearchParams::from_input("curry", "chicken, rice", "indian", "gluten free", "650");
    let client = SpoonacularClient::with_base_url("test_key".to_string(), server.url());
    let response = client.search_recipes(&params).await.unwrap();

    assert!(response.results.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_server_is_fetch_error() {
    // Nothing listens on port 9 on a test machine
    let client =
        SpoonacularClient::with_base_url("test_key".to_string(), "http://127.0.0.1:9".to_string());
    let result = client.search_recipes(&SearchParams::default()).await;

    assert!(matches!(
        result,
        Err(recipe_finder::FinderError::FetchError(_))
    ));
}
