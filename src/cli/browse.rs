use colored::Colorize;
use tabled::Table;

use crate::{
    cli::{app, spinner},
    error,
    management::{Action, ListView, PageView, RecipeDetail},
    types::RecipeTableRow,
    warning,
};

/// Prints the default listing as a table.
pub async fn list() {
    let app = app();
    let pb = spinner("Fetching cocktails...");
    let result = app.handle(Action::Load).await;
    pb.finish_and_clear();

    match result {
        Ok(()) => print_list(&app.snapshot().await.list),
        Err(e) => warning!("Error fetching cocktails: {}", e),
    }
}

/// Searches by name. A blank query exits with an error before any request.
pub async fn search(query: String) {
    let app = app();
    let pb = spinner(&format!("Searching cocktails for '{}'...", query));
    let result = app.handle(Action::Search(query)).await;
    pb.finish_and_clear();

    let page = app.snapshot().await;
    exit_on_alert(&page);

    match result {
        Ok(()) => print_list(&page.list),
        Err(e) => warning!("Error searching cocktails: {}", e),
    }
}

pub async fn letter(letter: char) {
    let app = app();
    let pb = spinner(&format!("Fetching cocktails starting with '{}'...", letter));
    let result = app.handle(Action::FilterByLetter(letter)).await;
    pb.finish_and_clear();

    match result {
        Ok(()) => print_list(&app.snapshot().await.list),
        Err(e) => warning!("Error filtering cocktails by letter: {}", e),
    }
}

/// Prints one recipe: image, ingredients and numbered instructions.
pub async fn show(id: String) {
    let app = app();
    let pb = spinner(&format!("Fetching cocktail {}...", id));
    let result = app.handle(Action::OpenModal(id)).await;
    pb.finish_and_clear();

    if let Err(e) = result {
        warning!("Error fetching cocktail details: {}", e);
        return;
    }

    let page = app.snapshot().await;
    if let Some(detail) = page.modal.detail.as_ref().filter(|_| page.modal.visible) {
        print_detail(detail);
    }
}

fn exit_on_alert(page: &PageView) {
    if let Some(alert) = &page.alert {
        error!("{}", alert);
    }
}

fn print_list(list: &ListView) {
    if list.is_not_found() {
        println!("Not Found");
        return;
    }

    let rows: Vec<RecipeTableRow> = list
        .cards()
        .map(|card| RecipeTableRow {
            id: card.id.clone(),
            name: card.name.clone(),
            image: card.image.clone(),
        })
        .collect();

    println!("{}", Table::new(rows));
}

fn print_detail(detail: &RecipeDetail) {
    println!("{}", detail.name.bold());
    println!("{}\n", detail.image.dimmed());

    println!("{}", "Ingredients:".bold());
    for ingredient in &detail.ingredients {
        println!("  - {}", ingredient);
    }

    println!("\n{}", "Instructions:".bold());
    for (index, step) in detail.steps.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }
}
