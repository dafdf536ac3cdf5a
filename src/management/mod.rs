//! Page state management.
//!
//! - [`page`] - view state and the pure transforms that build it
//! - [`app`] - the controller that turns actions into fetches and view updates
//! - [`clock`] - the once-per-second `HH:MM` display with an explicit handle

pub mod app;
pub mod clock;
pub mod page;

pub use app::{Action, App};
pub use clock::{Clock, ClockHandle, SystemTime, TimeSource};
pub use page::{CocktailCard, ListItem, ListView, ModalView, PageView, RecipeDetail};
