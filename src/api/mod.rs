//! # API Module
//!
//! HTTP endpoints of the local cocktail front end.
//!
//! ## Overview
//!
//! Every page route turns the request into a [`crate::management::Action`],
//! dispatches it on the shared controller and renders the whole page from the
//! resulting view state. There is no client-side state: reloading a route
//! replays its action.
//!
//! ## Endpoints
//!
//! ### Pages
//!
//! - [`index`] - `GET /`, page load with the default listing
//! - [`search`] - `GET /search?q=...`, search by name
//! - [`letter`] - `GET /letter/{letter}`, filter by first letter
//! - [`recipe`] - `GET /recipe/{id}`, detail modal for one recipe
//! - [`close`] - `GET /close`, hide the modal
//! - [`action`] - `GET /action/{name}?id=...`, dispatch by `data-action` name
//!
//! ### Other
//!
//! - [`google`] - `GET /google?q=...`, redirect to the web search engine
//! - [`clock`] - `GET /clock`, the current `HH:MM` display as plain text
//! - [`health`] - `GET /health`, status and version information
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use cocktailcli::server;
//!
//! let router = server::router(state);
//! ```

mod health;
mod pages;

pub use health::health;
pub use pages::{FrontEnd, action, clock, close, google, index, letter, recipe, search};
