use chrono::{NaiveTime, Timelike};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{cocktaildb::CocktailError, types::Recipe};

pub const EMPTY_QUERY_ALERT: &str = "Please enter a search query.";

pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Main listing only shows recipes that come with a picture.
pub fn has_thumbnail(recipe: &Recipe) -> bool {
    !is_blank(recipe.thumbnail.as_deref())
}

/// Search and letter results only show recipes that can be opened meaningfully.
pub fn has_name_and_instructions(recipe: &Recipe) -> bool {
    !is_blank(recipe.name.as_deref()) && !is_blank(recipe.instructions.as_deref())
}

/// Builds the ingredient lines of a recipe as `"<measure> <ingredient>"`.
///
/// Slots are scanned in index order and only slots with a non-blank
/// ingredient are kept. A missing or blank measure leaves just the
/// ingredient name.
pub fn ingredient_lines(recipe: &Recipe) -> Vec<String> {
    recipe
        .ingredients
        .iter()
        .filter(|slot| !is_blank(slot.ingredient.as_deref()))
        .map(|slot| {
            let ingredient = slot.ingredient.as_deref().unwrap_or_default().trim();
            match slot.measure.as_deref().map(str::trim) {
                Some(measure) if !measure.is_empty() => format!("{measure} {ingredient}"),
                _ => ingredient.to_string(),
            }
        })
        .collect()
}

/// Splits free-text instructions into ordered steps, dropping blank lines.
pub fn instruction_steps(instructions: &str) -> Vec<String> {
    instructions
        .split('\n')
        .filter(|step| !step.trim().is_empty())
        .map(|step| step.trim_end_matches('\r').to_string())
        .collect()
}

pub fn format_clock(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Builds the external web search URL for `query`.
///
/// Every non-alphanumeric byte of the query is percent-encoded. A blank
/// query is rejected with the same message the search box uses.
pub fn google_search_url(base: &str, query: &str) -> Result<String, CocktailError> {
    if query.trim().is_empty() {
        return Err(CocktailError::InvalidInput(EMPTY_QUERY_ALERT.to_string()));
    }

    Ok(format!(
        "{base}?q={query}",
        base = base,
        query = utf8_percent_encode(query, NON_ALPHANUMERIC)
    ))
}

/// Parses a letter filter argument. Accepts exactly one ASCII letter and
/// normalizes it to lowercase.
pub fn parse_letter(value: &str) -> Result<char, String> {
    let mut chars = value.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase()),
        _ => Err(format!("'{}' is not a single letter", value)),
    }
}
