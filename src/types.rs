use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tabled::Tabled;

/// Number of indexed ingredient/measure slots carried by every recipe record.
pub const INGREDIENT_SLOTS: u8 = 15;

/// Response envelope shared by all three recipe endpoints.
///
/// The API answers `{"drinks": null}` (or omits the field) when nothing
/// matches, so `drinks` is optional rather than an empty list.
#[derive(Debug, Clone, Deserialize)]
pub struct DrinksResponse {
    #[serde(default)]
    pub drinks: Option<Vec<Recipe>>,
}

/// One cocktail as returned by the recipe API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawDrink")]
pub struct Recipe {
    pub id: String,
    pub name: Option<String>,
    pub thumbnail: Option<String>,
    pub instructions: Option<String>,
    /// Always [`INGREDIENT_SLOTS`] entries, ordered by index starting at 1.
    pub ingredients: Vec<IngredientSlot>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngredientSlot {
    pub index: u8,
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

#[derive(Deserialize)]
struct RawDrink {
    #[serde(rename = "idDrink")]
    id: String,
    #[serde(rename = "strDrink", default)]
    name: Option<String>,
    #[serde(rename = "strDrinkThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

impl From<RawDrink> for Recipe {
    fn from(raw: RawDrink) -> Self {
        let field = |key: String| {
            raw.rest
                .get(&key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let ingredients = (1..=INGREDIENT_SLOTS)
            .map(|index| IngredientSlot {
                index,
                ingredient: field(format!("strIngredient{index}")),
                measure: field(format!("strMeasure{index}")),
            })
            .collect();

        Recipe {
            id: raw.id,
            name: raw.name,
            thumbnail: raw.thumbnail,
            instructions: raw.instructions,
            ingredients,
        }
    }
}

impl Recipe {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Thumbnail URL with the API's `/preview` size suffix.
    pub fn preview_image(&self) -> String {
        format!("{}/preview", self.thumbnail.as_deref().unwrap_or_default())
    }
}

#[derive(Tabled)]
pub struct RecipeTableRow {
    pub id: String,
    pub name: String,
    pub image: String,
}
