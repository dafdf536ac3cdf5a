//! # CLI Module
//!
//! This module provides the command-line interface layer for cocktailcli. Every
//! command drives the same [`crate::management::App`] controller the web front
//! end uses and prints the resulting view state to the terminal.
//!
//! ## Command Categories
//!
//! ### Browsing
//!
//! - [`list`] - Default listing of recipes starting with the configured letter
//! - [`search`] - Search recipes by name
//! - [`letter`] - Filter recipes by first letter
//! - [`show`] - Ingredients and numbered instructions for one recipe
//!
//! ### Utilities
//!
//! - [`google`] - Open a web search for a query in the default browser
//! - [`clock`] - Show the running `HH:MM` clock until Ctrl-C
//! - [`serve`] - Start the local web front end
//!
//! ## Error Handling Philosophy
//!
//! Fetch failures and empty results are reported as warnings and never abort
//! the program. A blank query is a user error and terminates with exit code 1,
//! the terminal equivalent of a blocking alert.
//!
//! ## Usage Patterns
//!
//! ```bash
//! cocktailcli list                # cocktails starting with 'a'
//! cocktailcli search margarita    # search by name
//! cocktailcli letter g            # cocktails starting with 'g'
//! cocktailcli show 11007          # recipe details
//! cocktailcli google "negroni history"
//! cocktailcli serve               # http://127.0.0.1:8080
//! ```

mod browse;
mod clock;
mod google;
mod serve;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{cocktaildb::CocktailDb, config, management::App};

pub use browse::{letter, list, search, show};
pub use clock::clock;
pub use google::google;
pub use serve::serve;

fn app() -> App<CocktailDb> {
    App::new(CocktailDb::from_env(), config::default_letter())
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
