use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::{Path, Query},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use html_escape::encode_text;
use tokio::sync::watch;

use crate::{
    cocktaildb::RecipeSource,
    management::{Action, App, PageView},
    markup, utils,
};

/// Everything the page routes share.
pub struct FrontEnd<S> {
    pub app: App<S>,
    pub clock: watch::Receiver<String>,
    pub search_engine_url: String,
}

impl<S: RecipeSource> FrontEnd<S> {
    pub fn new(app: App<S>, clock: watch::Receiver<String>, search_engine_url: String) -> Self {
        Self {
            app,
            clock,
            search_engine_url,
        }
    }

    /// Runs `action` and renders the resulting page.
    ///
    /// An alert is shown exactly once: it is cleared after the page carrying
    /// it has been rendered.
    async fn respond(&self, action: Action) -> Html<String> {
        let view = self.app.dispatch(action).await;
        self.render(view).await
    }

    async fn render(&self, view: PageView) -> Html<String> {
        let clock = self.clock.borrow().clone();
        let html = markup::page(&view, &clock);
        if view.alert.is_some() {
            self.app.dispatch(Action::DismissAlert).await;
        }
        Html(html)
    }
}

type Shared<S> = Extension<Arc<FrontEnd<S>>>;

fn query_param(params: &HashMap<String, String>, key: &str) -> String {
    params.get(key).cloned().unwrap_or_default()
}

fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(format!("<h4>{}</h4>", encode_text(message))),
    )
        .into_response()
}

pub async fn index<S: RecipeSource>(Extension(state): Shared<S>) -> Html<String> {
    state.respond(Action::Load).await
}

pub async fn search<S: RecipeSource>(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Shared<S>,
) -> Html<String> {
    state
        .respond(Action::Search(query_param(&params, "q")))
        .await
}

pub async fn letter<S: RecipeSource>(
    Path(letter): Path<String>,
    Extension(state): Shared<S>,
) -> Response {
    match utils::parse_letter(&letter) {
        Ok(letter) => state
            .respond(Action::FilterByLetter(letter))
            .await
            .into_response(),
        Err(e) => not_found(&e),
    }
}

pub async fn recipe<S: RecipeSource>(
    Path(id): Path<String>,
    Extension(state): Shared<S>,
) -> Html<String> {
    state.respond(Action::OpenModal(id)).await
}

pub async fn close<S: RecipeSource>(Extension(state): Shared<S>) -> Html<String> {
    state.respond(Action::CloseModal).await
}

/// Generic entry point for generated elements: `/action/{data-action}?id={data-id}`.
pub async fn action<S: RecipeSource>(
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Shared<S>,
) -> Response {
    match Action::from_data_attributes(&name, params.get("id").map(String::as_str)) {
        Some(action) => state.respond(action).await.into_response(),
        None => not_found(&format!("unknown action '{}'", name)),
    }
}

pub async fn google<S: RecipeSource>(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Shared<S>,
) -> Response {
    match utils::google_search_url(&state.search_engine_url, &query_param(&params, "q")) {
        Ok(url) => Redirect::to(&url).into_response(),
        Err(e) => {
            state.app.alert(e.to_string()).await;
            let view = state.app.snapshot().await;
            state.render(view).await.into_response()
        }
    }
}

pub async fn clock<S: RecipeSource>(Extension(state): Shared<S>) -> String {
    state.clock.borrow().clone()
}
