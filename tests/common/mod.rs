#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use cocktailcli::{
    cocktaildb::{CocktailError, RecipeSource},
    types::Recipe,
};
use serde_json::{Value, json};
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub enum Reply {
    Drinks(Vec<Recipe>),
    NoMatch,
    Broken,
}

/// In-memory recipe source keyed by `f:<letter>`, `s:<query>` and `i:<id>`.
///
/// Unknown keys answer `NoMatch`. A gated key waits until its gate is
/// released before answering.
#[derive(Default)]
pub struct FakeSource {
    calls: Mutex<Vec<String>>,
    replies: Mutex<HashMap<String, Reply>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, key: &str, reply: Reply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(key.to_string(), reply);
        self
    }

    /// Holds back the answer for `key` until the returned sender fires.
    pub fn gate(&self, key: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(key.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn reply(&self, key: String) -> Reply {
        self.calls.lock().unwrap().push(key.clone());
        let gate = self.gates.lock().unwrap().remove(&key);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        let reply = self.replies.lock().unwrap().get(&key).cloned();
        reply.unwrap_or(Reply::NoMatch)
    }

    async fn drinks(&self, key: String) -> Result<Vec<Recipe>, CocktailError> {
        match self.reply(key.clone()).await {
            Reply::Drinks(drinks) => Ok(drinks),
            Reply::NoMatch => Err(CocktailError::NotFound(key)),
            Reply::Broken => Err(broken()),
        }
    }
}

impl RecipeSource for FakeSource {
    async fn by_first_letter(&self, letter: char) -> Result<Vec<Recipe>, CocktailError> {
        self.drinks(format!("f:{}", letter)).await
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Recipe>, CocktailError> {
        self.drinks(format!("s:{}", query)).await
    }

    async fn lookup_by_id(&self, id: &str) -> Result<Recipe, CocktailError> {
        let key = format!("i:{}", id);
        let mut drinks = self.drinks(key.clone()).await?;
        if drinks.is_empty() {
            return Err(CocktailError::NotFound(key));
        }
        Ok(drinks.remove(0))
    }
}

fn broken() -> CocktailError {
    match serde_json::from_str::<Value>("{\"drinks\": [") {
        Err(e) => CocktailError::Decode(e),
        Ok(_) => unreachable!("truncated JSON must not parse"),
    }
}

/// Builds a recipe the way the API would send it.
pub fn recipe(id: &str, name: &str, thumb: Option<&str>, instructions: Option<&str>) -> Recipe {
    serde_json::from_value(json!({
        "idDrink": id,
        "strDrink": name,
        "strDrinkThumb": thumb,
        "strInstructions": instructions,
        "strIngredient1": "Tequila",
        "strMeasure1": "1 1/2 oz ",
        "strIngredient2": "Triple sec",
        "strMeasure2": "1/2 oz ",
        "strIngredient3": null,
        "strMeasure3": null
    }))
    .unwrap()
}

pub fn margarita() -> Recipe {
    recipe(
        "11007",
        "Margarita",
        Some("https://www.thecocktaildb.com/images/media/drink/5noda61589575158.jpg"),
        Some("Rub the rim of the glass with the lime slice.\n\nShake with ice.\n"),
    )
}

pub fn drink_json(id: &str, name: &str) -> Value {
    json!({
        "idDrink": id,
        "strDrink": name,
        "strDrinkThumb": format!("https://example.com/{}.jpg", id),
        "strInstructions": "Stir.",
        "strIngredient1": "Gin",
        "strMeasure1": "2 oz"
    })
}
