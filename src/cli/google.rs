use crate::{config, error, success, utils, warning};

/// Opens a web search for `query` in the default browser.
pub async fn google(query: String) {
    let url = match utils::google_search_url(&config::search_engine_url(), &query) {
        Ok(url) => url,
        Err(e) => error!("{}", e),
    };

    if webbrowser::open(&url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        );
        return;
    }

    success!("Opened web search for '{}'.", query.trim());
}
