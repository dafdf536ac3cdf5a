//! HTML rendering of the page view state.
//!
//! All functions here are pure: they take view state and return markup.
//! Recipe text is escaped before it is placed in the document. Interactive
//! elements carry `data-action`/`data-id` attributes that resolve through
//! [`crate::management::Action::from_data_attributes`], plus a plain link to
//! the matching route so the page works without scripting.

use html_escape::{encode_double_quoted_attribute, encode_text};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::management::{ListItem, ListView, ModalView, PageView, RecipeDetail};

const NOT_FOUND: &str = "Not Found";

pub fn cocktail_list(list: &ListView) -> String {
    list.items
        .iter()
        .map(|item| match item {
            ListItem::Cocktail(card) => format!(
                r#"<li class="cocktail"><h2>{name}</h2><img src="{image}" alt="{alt} Image"><a class="view-recipe-btn" data-action="open-modal" data-id="{id}" href="/recipe/{path}">View Recipe</a></li>"#,
                name = encode_text(&card.name),
                image = encode_double_quoted_attribute(&card.image),
                alt = encode_double_quoted_attribute(&card.name),
                id = encode_double_quoted_attribute(&card.id),
                path = utf8_percent_encode(&card.id, NON_ALPHANUMERIC),
            ),
            ListItem::NotFound => format!(r#"<li class="not-found">{}</li>"#, NOT_FOUND),
        })
        .collect()
}

pub fn ingredient_items(ingredients: &[String]) -> String {
    ingredients
        .iter()
        .map(|line| format!("<li>{}</li>", encode_text(line)))
        .collect()
}

/// Ordered steps; numbering comes from the surrounding `<ol>`.
pub fn instruction_items(steps: &[String]) -> String {
    ingredient_items(steps)
}

pub fn modal_content(detail: &RecipeDetail) -> String {
    format!(
        r#"<h2>{name}</h2><img src="{image}" alt="{alt} Image"><p><strong>Ingredients:</strong></p><ul>{ingredients}</ul><p><strong>Instructions:</strong></p><ol>{steps}</ol>"#,
        name = encode_text(&detail.name),
        image = encode_double_quoted_attribute(&detail.image),
        alt = encode_double_quoted_attribute(&detail.name),
        ingredients = ingredient_items(&detail.ingredients),
        steps = instruction_items(&detail.steps),
    )
}

pub fn modal(view: &ModalView) -> String {
    format!(
        r#"<div id="recipe-modal" class="modal" style="display: {display};"><div class="modal-inner"><a class="close" data-action="close-modal" href="/close">&times;</a><div id="recipe-content">{content}</div></div></div>"#,
        display = if view.visible { "block" } else { "none" },
        content = view.detail.as_ref().map(modal_content).unwrap_or_default(),
    )
}

fn letter_bar() -> String {
    ('a'..='z')
        .map(|letter| {
            format!(
                r#"<a class="letter" data-action="filter-letter" data-id="{letter}" href="/letter/{letter}">{upper}</a>"#,
                letter = letter,
                upper = letter.to_ascii_uppercase(),
            )
        })
        .collect()
}

fn alert(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(
            r#"<div class="alert" role="alert"><span>{}</span><a data-action="dismiss-alert" href="/action/dismiss-alert">OK</a></div>"#,
            encode_text(message)
        ),
        None => String::new(),
    }
}

/// Renders the complete document for `view` with `clock` as the time shown
/// until the first poll.
pub fn page(view: &PageView, clock: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Cocktails</title>
</head>
<body>
<header>
<h1>Cocktails</h1>
<span id="current-time">{clock}</span>
<form action="/search" method="get"><input id="search-input" name="q" type="text" placeholder="Search cocktails"><button type="submit">Search</button></form>
<form action="/google" method="get" target="_blank"><input id="google-search-query" name="q" type="text" placeholder="Search the web"><button id="search-google" type="submit">Google</button></form>
<nav class="letters">{letters}</nav>
</header>
{alert}
<ul id="cocktail-list">{list}</ul>
{modal}
<script>
setInterval(function () {{
  fetch('/clock').then(function (r) {{ return r.text(); }}).then(function (t) {{
    document.getElementById('current-time').textContent = t;
  }});
}}, 1000);
</script>
</body>
</html>
"#,
        clock = encode_text(clock),
        letters = letter_bar(),
        alert = alert(&view.alert),
        list = cocktail_list(&view.list),
        modal = modal(&view.modal),
    )
}
