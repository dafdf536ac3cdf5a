mod common;

use cocktailcli::cocktaildb::{CocktailDb, CocktailError, RecipeSource};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_by_first_letter_queries_search_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({ "drinks": [common::drink_json("1", "Gimlet"), common::drink_json("2", "Gin Fizz")] });

    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("f".into(), "g".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let db = CocktailDb::new(server.url());
    let drinks = db.by_first_letter('g').await.unwrap();

    mock.assert_async().await;
    assert_eq!(drinks.len(), 2);
    assert_eq!(drinks[0].display_name(), "Gimlet");
    assert_eq!(drinks[1].id, "2");
}

#[tokio::test]
async fn test_search_by_name_encodes_query() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({ "drinks": [common::drink_json("7", "Gin and Tonic")] });

    let mock = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("s".into(), "gin & tonic".into()))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let db = CocktailDb::new(format!("{}/", server.url()));
    let drinks = db.search_by_name("gin & tonic").await.unwrap();

    mock.assert_async().await;
    assert_eq!(drinks[0].display_name(), "Gin and Tonic");
}

#[tokio::test]
async fn test_lookup_by_id_returns_first_drink() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({ "drinks": [common::drink_json("11007", "Margarita")] });

    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "11007".into()))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let db = CocktailDb::new(server.url());
    let drink = db.lookup_by_id("11007").await.unwrap();

    assert_eq!(drink.id, "11007");
    assert_eq!(drink.display_name(), "Margarita");
}

#[tokio::test]
async fn test_null_drinks_is_not_found() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"drinks": null}"#)
        .create_async()
        .await;

    let db = CocktailDb::new(server.url());
    let result = db.lookup_by_id("0").await;

    assert!(matches!(result, Err(CocktailError::NotFound(_))));
}

#[tokio::test]
async fn test_empty_drinks_array_is_an_empty_listing() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("f".into(), "x".into()))
        .with_status(200)
        .with_body(r#"{"drinks": []}"#)
        .create_async()
        .await;

    let db = CocktailDb::new(server.url());

    assert!(db.by_first_letter('x').await.unwrap().is_empty());
    assert!(db.fetch_all_cocktails('x').await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_drinks_array_is_not_found_for_lookup() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"drinks": []}"#)
        .create_async()
        .await;

    let db = CocktailDb::new(server.url());
    let result = db.lookup_by_id("42").await;

    assert!(matches!(result, Err(CocktailError::NotFound(_))));
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let db = CocktailDb::new(server.url());
    let result = db.search_by_name("mojito").await;

    assert!(matches!(result, Err(CocktailError::Decode(_))));
}

#[tokio::test]
async fn test_server_error_is_network_error() {
    let mut server = mockito::Server::new_async().await;

    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let db = CocktailDb::new(server.url());
    let result = db.by_first_letter('a').await;

    assert!(matches!(result, Err(CocktailError::Network(_))));
}

#[tokio::test]
async fn test_fetch_all_cocktails_keeps_only_drinks_with_thumbnails() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({ "drinks": [
        common::drink_json("1", "Abbey Martini"),
        { "idDrink": "2", "strDrink": "Ace", "strDrinkThumb": "  ", "strInstructions": "Shake." },
        { "idDrink": "3", "strDrink": "Adam", "strDrinkThumb": null, "strInstructions": "Stir." },
        common::drink_json("4", "Affair")
    ]});

    let _m = server
        .mock("GET", "/search.php")
        .match_query(Matcher::UrlEncoded("f".into(), "a".into()))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let db = CocktailDb::new(server.url());
    let drinks = db.fetch_all_cocktails('a').await.unwrap();

    let ids: Vec<&str> = drinks.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);
}
