use reqwest::Client;

use crate::{
    cocktaildb::{CocktailError, RecipeSource},
    config,
    types::{DrinksResponse, Recipe},
};

/// HTTP client for TheCocktailDB.
///
/// Holds a single `reqwest::Client` so connections are reused between
/// requests. The base URL is configurable so tests can point it at a local
/// mock server.
#[derive(Debug, Clone)]
pub struct CocktailDb {
    client: Client,
    base_url: String,
}

impl CocktailDb {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored, so both
    /// `https://host/api/json/v1/1` and `https://host/api/json/v1/1/` work.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Root URL of the API, without the endpoint file name
    ///
    /// # Example
    ///
    /// ```
    /// let db = CocktailDb::new("https://www.thecocktaildb.com/api/json/v1/1");
    /// let drinks = db.by_first_letter('a').await?;
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client from the configured API URL.
    ///
    /// Reads `COCKTAIL_API_URL` through [`config::cocktail_api_url`] and falls
    /// back to the public endpoint when it is unset.
    ///
    /// # Example
    ///
    /// ```
    /// config::load_env().await?;
    /// let db = CocktailDb::from_env();
    /// ```
    pub fn from_env() -> Self {
        Self::new(config::cocktail_api_url())
    }

    /// Sends a GET request to `endpoint` and decodes the `drinks` envelope.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Endpoint file name, e.g. `search.php`
    /// * `params` - Query parameters, URL-encoded by `reqwest`
    /// * `what` - Description of the request used in the `NotFound` error
    ///
    /// # Returns
    ///
    /// The drinks as the API delivered them. An empty array is a valid,
    /// empty result.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the API answers `{"drinks": null}`
    /// - `Network` on transport failures or a non-success status
    /// - `Decode` when the body is not the expected JSON
    async fn get_drinks(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
        what: String,
    ) -> Result<Vec<Recipe>, CocktailError> {
        let api_url = format!("{uri}/{endpoint}", uri = self.base_url, endpoint = endpoint);

        let body = self
            .client
            .get(&api_url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: DrinksResponse = serde_json::from_str(&body)?;
        response.drinks.ok_or(CocktailError::NotFound(what))
    }
}

impl RecipeSource for CocktailDb {
    /// Fetches every recipe whose name starts with `letter`.
    ///
    /// Calls `search.php?f=<letter>`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the API has no drinks for the letter, and
    /// `Network`/`Decode` for transport or parse failures.
    ///
    /// # Example
    ///
    /// ```
    /// let drinks = db.by_first_letter('m').await?;
    /// ```
    async fn by_first_letter(&self, letter: char) -> Result<Vec<Recipe>, CocktailError> {
        let letter = letter.to_string();
        self.get_drinks("search.php", &[("f", letter.as_str())], format!("letter {}", letter))
            .await
    }

    /// Fetches every recipe whose name contains `query`.
    ///
    /// Calls `search.php?s=<query>`. The query is sent as given; callers
    /// reject blank input before calling.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when nothing matches, and `Network`/`Decode` for
    /// transport or parse failures.
    ///
    /// # Example
    ///
    /// ```
    /// let drinks = db.search_by_name("margarita").await?;
    /// ```
    async fn search_by_name(&self, query: &str) -> Result<Vec<Recipe>, CocktailError> {
        self.get_drinks("search.php", &[("s", query)], format!("search query {}", query))
            .await
    }

    /// Fetches a single recipe by its identifier.
    ///
    /// Calls `lookup.php?i=<id>` and returns the first drink of the answer.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the API answers with a `null` or empty drinks
    /// list, and `Network`/`Decode` for transport or parse failures.
    ///
    /// # Example
    ///
    /// ```
    /// let margarita = db.lookup_by_id("11007").await?;
    /// ```
    async fn lookup_by_id(&self, id: &str) -> Result<Recipe, CocktailError> {
        let what = format!("ID {}", id);
        let mut drinks = self
            .get_drinks("lookup.php", &[("i", id)], what.clone())
            .await?;
        if drinks.is_empty() {
            return Err(CocktailError::NotFound(what));
        }
        Ok(drinks.swap_remove(0))
    }
}
