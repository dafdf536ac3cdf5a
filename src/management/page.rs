use crate::{types::Recipe, utils};

/// Everything the page shows, minus the clock.
///
/// Markup is always rendered from this value; nothing else on the page holds
/// state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageView {
    pub list: ListView,
    pub modal: ModalView,
    /// Blocking user-facing message, shown until dismissed.
    pub alert: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListView {
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListItem {
    Cocktail(CocktailCard),
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CocktailCard {
    pub id: String,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalView {
    pub visible: bool,
    pub detail: Option<RecipeDetail>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl From<&Recipe> for CocktailCard {
    fn from(recipe: &Recipe) -> Self {
        CocktailCard {
            id: recipe.id.clone(),
            name: recipe.display_name().to_string(),
            image: recipe.preview_image(),
        }
    }
}

impl From<&Recipe> for RecipeDetail {
    fn from(recipe: &Recipe) -> Self {
        RecipeDetail {
            id: recipe.id.clone(),
            name: recipe.display_name().to_string(),
            image: recipe.preview_image(),
            ingredients: utils::ingredient_lines(recipe),
            steps: utils::instruction_steps(recipe.instructions.as_deref().unwrap_or_default()),
        }
    }
}

impl ListView {
    /// One card per recipe, in the given order. Filtering happens upstream.
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        ListView {
            items: recipes
                .iter()
                .map(|r| ListItem::Cocktail(CocktailCard::from(r)))
                .collect(),
        }
    }

    pub fn not_found() -> Self {
        ListView {
            items: vec![ListItem::NotFound],
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = &CocktailCard> {
        self.items.iter().filter_map(|item| match item {
            ListItem::Cocktail(card) => Some(card),
            ListItem::NotFound => None,
        })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.items.as_slice(), [ListItem::NotFound])
    }
}

impl ModalView {
    pub fn show(detail: RecipeDetail) -> Self {
        ModalView {
            visible: true,
            detail: Some(detail),
        }
    }

    /// Hides the modal but keeps its last content, like a `display: none`.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}
