use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::sync::Mutex;

use crate::{
    cocktaildb::{CocktailError, RecipeSource},
    management::page::{ListView, ModalView, PageView, RecipeDetail},
    utils, warning,
};

/// A user interaction the page can raise.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Load,
    Search(String),
    FilterByLetter(char),
    OpenModal(String),
    CloseModal,
    DismissAlert,
}

impl Action {
    /// Resolves the handler for a generated element from its `data-action`
    /// and `data-id` attributes.
    ///
    /// Returns `None` for unknown actions or when a required id is missing.
    pub fn from_data_attributes(action: &str, id: Option<&str>) -> Option<Action> {
        match (action, id) {
            ("load", _) => Some(Action::Load),
            ("open-modal", Some(id)) if !id.trim().is_empty() => {
                Some(Action::OpenModal(id.trim().to_string()))
            }
            ("filter-letter", Some(letter)) => {
                utils::parse_letter(letter).ok().map(Action::FilterByLetter)
            }
            ("close-modal", _) => Some(Action::CloseModal),
            ("dismiss-alert", _) => Some(Action::DismissAlert),
            _ => None,
        }
    }
}

/// Page controller.
///
/// Owns the page view state and turns [`Action`]s into fetches and view
/// updates. Fetch failures are logged and leave the page untouched; only
/// input validation produces a user-visible alert. A [`Action::Load`] starts
/// over from an empty page.
///
/// Every request that replaces the list takes a ticket, and its response is
/// only applied while that ticket is still the newest one. Modal lookups are
/// sequenced the same way on their own counter.
pub struct App<S> {
    source: S,
    default_letter: char,
    page: Arc<Mutex<PageView>>,
    list_ticket: AtomicU64,
    modal_ticket: AtomicU64,
}

impl<S: RecipeSource> App<S> {
    pub fn new(source: S, default_letter: char) -> Self {
        Self {
            source,
            default_letter,
            page: Arc::new(Mutex::new(PageView::default())),
            list_ticket: AtomicU64::new(0),
            modal_ticket: AtomicU64::new(0),
        }
    }

    pub fn page(&self) -> Arc<Mutex<PageView>> {
        Arc::clone(&self.page)
    }

    pub async fn snapshot(&self) -> PageView {
        self.page.lock().await.clone()
    }

    /// Runs `action`, logging any failure, and returns the resulting page.
    pub async fn dispatch(&self, action: Action) -> PageView {
        if let Err(e) = self.handle(action).await {
            warning!("{}", e);
        }
        self.snapshot().await
    }

    /// Runs `action` and reports fetch failures to the caller instead of
    /// logging them.
    pub async fn handle(&self, action: Action) -> Result<(), CocktailError> {
        match action {
            Action::Load => self.load().await,
            Action::Search(query) => self.search(&query).await,
            Action::FilterByLetter(letter) => self.filter_by_letter(letter).await,
            Action::OpenModal(id) => self.open_modal(&id).await,
            Action::CloseModal => {
                self.close_modal().await;
                Ok(())
            }
            Action::DismissAlert => {
                self.page.lock().await.alert = None;
                Ok(())
            }
        }
    }

    /// Resets the page and renders the default listing.
    ///
    /// The modal is hidden, the alert cleared and the list emptied before the
    /// fetch; pending list and detail responses are discarded. On failure the
    /// page stays empty.
    pub async fn load(&self) -> Result<(), CocktailError> {
        let ticket = next_ticket(&self.list_ticket);
        next_ticket(&self.modal_ticket);
        *self.page.lock().await = PageView::default();

        let recipes = self.source.fetch_all_cocktails(self.default_letter).await?;
        self.apply_list(ticket, ListView::from_recipes(&recipes)).await;
        Ok(())
    }

    /// Searches recipes by name.
    ///
    /// A blank query raises the alert without touching the network. No
    /// matches is reported as `NotFound` and the current list stays.
    pub async fn search(&self, query: &str) -> Result<(), CocktailError> {
        if query.trim().is_empty() {
            self.alert(utils::EMPTY_QUERY_ALERT).await;
            return Ok(());
        }

        let ticket = next_ticket(&self.list_ticket);
        let mut recipes = self.source.search_by_name(query).await?;
        recipes.retain(utils::has_name_and_instructions);
        self.apply_list(ticket, ListView::from_recipes(&recipes)).await;
        Ok(())
    }

    /// Shows recipes starting with `letter`, or a single "Not Found" entry
    /// when there are none.
    pub async fn filter_by_letter(&self, letter: char) -> Result<(), CocktailError> {
        let ticket = next_ticket(&self.list_ticket);
        let list = match self.source.by_first_letter(letter).await {
            Ok(mut recipes) => {
                recipes.retain(utils::has_name_and_instructions);
                ListView::from_recipes(&recipes)
            }
            Err(CocktailError::NotFound(what)) => {
                warning!("No drinks found for {}", what);
                ListView::not_found()
            }
            Err(e) => return Err(e),
        };
        self.apply_list(ticket, list).await;
        Ok(())
    }

    /// Loads one recipe and reveals the modal with its details. When nothing
    /// is found the modal keeps whatever state it had.
    pub async fn open_modal(&self, id: &str) -> Result<(), CocktailError> {
        let ticket = next_ticket(&self.modal_ticket);
        let recipe = self.source.lookup_by_id(id).await?;
        let detail = RecipeDetail::from(&recipe);

        let mut page = self.page.lock().await;
        if self.modal_ticket.load(Ordering::SeqCst) != ticket {
            warning!("Discarding stale details for drink {}", id);
            return Ok(());
        }
        page.modal = ModalView::show(detail);
        Ok(())
    }

    pub async fn close_modal(&self) {
        self.page.lock().await.modal.hide();
    }

    /// Raises a blocking user-facing message.
    pub async fn alert(&self, message: impl Into<String>) {
        self.page.lock().await.alert = Some(message.into());
    }

    async fn apply_list(&self, ticket: u64, list: ListView) {
        let mut page = self.page.lock().await;
        if self.list_ticket.load(Ordering::SeqCst) != ticket {
            warning!("Discarding stale list response (request {})", ticket);
            return;
        }
        page.list = list;
    }
}

fn next_ticket(counter: &AtomicU64) -> u64 {
    counter.fetch_add(1, Ordering::SeqCst) + 1
}
