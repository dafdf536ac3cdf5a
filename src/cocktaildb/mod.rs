//! # CocktailDB Integration Module
//!
//! This module wraps the three read-only endpoints of TheCocktailDB JSON API
//! that the front end needs:
//!
//! - `search.php?f=<letter>` - recipes whose name starts with a letter
//! - `search.php?s=<query>` - recipes whose name contains a fragment
//! - `lookup.php?i=<id>` - a single recipe by identifier
//!
//! Every endpoint answers with the same `{"drinks": [...]}` envelope, where a
//! `null` list means "no match". The client maps that case to
//! [`CocktailError::NotFound`] so callers can decide how visible an empty
//! result should be.
//!
//! ## Architecture
//!
//! ```text
//! App controller (management)
//!          ↓
//! RecipeSource trait
//!          ↓
//! CocktailDb (reqwest, serde_json)
//!          ↓
//! TheCocktailDB
//! ```
//!
//! The controller only knows about [`RecipeSource`]; tests drive it with an
//! in-memory implementation.
//!
//! ## Error Types
//!
//! - **`Network`** - transport failures and non-success HTTP statuses
//! - **`Decode`** - body was not the expected JSON shape
//! - **`NotFound`** - the API returned no drinks
//! - **`InvalidInput`** - user input rejected before any request was made

mod client;

use std::{fmt, future::Future, sync::Arc};

pub use client::CocktailDb;

use crate::{types::Recipe, utils};

#[derive(Debug)]
pub enum CocktailError {
    Network(reqwest::Error),
    Decode(serde_json::Error),
    NotFound(String),
    InvalidInput(String),
}

impl From<reqwest::Error> for CocktailError {
    fn from(err: reqwest::Error) -> Self {
        CocktailError::Network(err)
    }
}

impl From<serde_json::Error> for CocktailError {
    fn from(err: serde_json::Error) -> Self {
        CocktailError::Decode(err)
    }
}

impl fmt::Display for CocktailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CocktailError::Network(e) => write!(f, "request failed: {}", e),
            CocktailError::Decode(e) => write!(f, "unexpected response: {}", e),
            CocktailError::NotFound(what) => write!(f, "no drinks found for {}", what),
            CocktailError::InvalidInput(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CocktailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CocktailError::Network(e) => Some(e),
            CocktailError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

/// Anything able to answer the three recipe queries.
///
/// Results are returned as the API delivered them; display filtering is the
/// caller's job.
pub trait RecipeSource: Send + Sync + 'static {
    /// Retrieves every recipe whose name starts with `letter`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the API has no drinks for the letter. An empty
    /// result list is not an error.
    fn by_first_letter(
        &self,
        letter: char,
    ) -> impl Future<Output = Result<Vec<Recipe>, CocktailError>> + Send;

    /// Retrieves every recipe whose name contains `query`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when nothing matches.
    fn search_by_name(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Recipe>, CocktailError>> + Send;

    /// Retrieves a single recipe by identifier.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no recipe has this identifier.
    fn lookup_by_id(&self, id: &str) -> impl Future<Output = Result<Recipe, CocktailError>> + Send;

    /// Retrieves the default listing.
    ///
    /// Fetches every recipe starting with `letter` and keeps only the ones
    /// with a non-blank thumbnail, preserving API order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the API has no drinks for the letter, and
    /// `Network`/`Decode` for transport or parse failures.
    fn fetch_all_cocktails(
        &self,
        letter: char,
    ) -> impl Future<Output = Result<Vec<Recipe>, CocktailError>> + Send {
        async move {
            let mut recipes = self.by_first_letter(letter).await?;
            recipes.retain(utils::has_thumbnail);
            Ok(recipes)
        }
    }
}

impl<T: RecipeSource> RecipeSource for Arc<T> {
    fn by_first_letter(
        &self,
        letter: char,
    ) -> impl Future<Output = Result<Vec<Recipe>, CocktailError>> + Send {
        (**self).by_first_letter(letter)
    }

    fn search_by_name(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Recipe>, CocktailError>> + Send {
        (**self).search_by_name(query)
    }

    fn lookup_by_id(&self, id: &str) -> impl Future<Output = Result<Recipe, CocktailError>> + Send {
        (**self).lookup_by_id(id)
    }
}
