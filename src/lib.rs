//! Cocktail Recipe Browser Library
//!
//! This library provides a front end for TheCocktailDB: a default
//! alphabetical listing, free-text search, single-letter filtering and a
//! detail view per recipe. The same page state is served to the browser by a
//! small local web server and shown in the terminal by the CLI.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local web front end
//! - `cli` - Command-line interface implementations
//! - `cocktaildb` - TheCocktailDB client implementation
//! - `config` - Configuration management and environment variables
//! - `management` - Page view state, controller and clock
//! - `markup` - HTML rendering of the page view state
//! - `server` - Local HTTP server for the web front end
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use cocktailcli::{cocktaildb::CocktailDb, config, management::{Action, App}};
//!
//! #[tokio::main]
//! async fn main() -> cocktailcli::Res<()> {
//!     config::load_env().await?;
//!     let app = App::new(CocktailDb::from_env(), config::default_letter());
//!     let page = app.dispatch(Action::Load).await;
//!     println!("{} cocktails", page.list.cards().count());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod cocktaildb;
pub mod config;
pub mod management;
pub mod markup;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use cocktailcli::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Serving cocktails on http://{}", addr);
/// info!("Found {} cocktails", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations. Used to provide positive feedback
/// when operations complete successfully.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// success!("Opened web search for {}", query);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Cannot start web server: {}", err);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark to stderr.
///
/// Creates a formatted output line with a yellow "!" indicator for recoverable
/// problems: failed fetches, empty results and discarded stale responses.
/// Written to stderr so tables and markup on stdout stay clean.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!("No drinks found for letter {}", letter);
/// warning!("Error fetching cocktails: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
