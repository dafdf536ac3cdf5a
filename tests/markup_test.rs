mod common;

use cocktailcli::{
    management::{ListView, ModalView, PageView, RecipeDetail},
    markup,
};

fn detail() -> RecipeDetail {
    RecipeDetail::from(&common::margarita())
}

#[test]
fn test_cocktail_list_renders_one_item_per_card() {
    let list = ListView::from_recipes(&[
        common::margarita(),
        common::recipe("2", "Martini", Some("https://example.com/m.jpg"), Some("Stir.")),
    ]);

    let html = markup::cocktail_list(&list);

    assert_eq!(html.matches(r#"<li class="cocktail">"#).count(), 2);
    assert!(html.contains("<h2>Margarita</h2>"));
    assert!(html.contains(r#"src="https://example.com/m.jpg/preview""#));
    assert!(html.contains(r#"alt="Martini Image""#));
}

#[test]
fn test_cocktail_list_wires_view_buttons_by_data_attributes() {
    let list = ListView::from_recipes(&[common::margarita()]);

    let html = markup::cocktail_list(&list);

    assert!(html.contains(r#"data-action="open-modal" data-id="11007""#));
    assert!(html.contains(r#"href="/recipe/11007""#));
    assert!(!html.contains("onclick"));
}

#[test]
fn test_not_found_list_renders_single_placeholder() {
    let html = markup::cocktail_list(&ListView::not_found());

    assert_eq!(html, r#"<li class="not-found">Not Found</li>"#);
}

#[test]
fn test_recipe_text_is_escaped() {
    let list = ListView::from_recipes(&[common::recipe(
        "1",
        "<b>Bold</b> & \"Brave\"",
        Some("https://example.com/x.jpg"),
        Some("Mix."),
    )]);

    let html = markup::cocktail_list(&list);

    assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt; &amp;"));
    assert!(!html.contains("<b>Bold</b>"));
    assert!(!html.contains(r#""Brave" Image"#));
}

#[test]
fn test_modal_content_lists_ingredients_and_numbered_steps() {
    let html = markup::modal_content(&detail());

    assert!(html.contains("<h2>Margarita</h2>"));
    assert!(html.contains(
        "<ul><li>1 1/2 oz Tequila</li><li>1/2 oz Triple sec</li></ul>"
    ));
    assert!(html.contains(
        "<ol><li>Rub the rim of the glass with the lime slice.</li><li>Shake with ice.</li></ol>"
    ));
}

#[test]
fn test_modal_visibility_follows_view_state() {
    let mut view = ModalView::show(detail());
    assert!(markup::modal(&view).contains("display: block;"));

    view.hide();
    let hidden = markup::modal(&view);
    assert!(hidden.contains("display: none;"));
    assert!(hidden.contains(r#"<div id="recipe-content"><h2>Margarita</h2>"#));

    assert!(markup::modal(&ModalView::default()).contains(r#"<div id="recipe-content"></div>"#));
}

#[test]
fn test_page_contains_expected_element_ids() {
    let html = markup::page(&PageView::default(), "08:15");

    for id in [
        "cocktail-list",
        "search-input",
        "recipe-modal",
        "recipe-content",
        "current-time",
        "google-search-query",
        "search-google",
    ] {
        assert!(html.contains(&format!(r#"id="{}""#, id)), "missing element {}", id);
    }
    assert!(html.contains(r#"<span id="current-time">08:15</span>"#));
    assert!(html.contains(r#"target="_blank""#));
}

#[test]
fn test_page_has_letter_bar_and_alert() {
    let view = PageView {
        alert: Some("Please enter a search query.".to_string()),
        ..PageView::default()
    };

    let html = markup::page(&view, "12:00");

    assert_eq!(html.matches(r#"data-action="filter-letter""#).count(), 26);
    assert!(html.contains(r#"href="/letter/z">Z</a>"#));
    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains("Please enter a search query."));

    let quiet = markup::page(&PageView::default(), "12:00");
    assert!(!quiet.contains(r#"role="alert""#));
}
