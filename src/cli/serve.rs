use crate::{error, server, success};

pub async fn serve() {
    match server::start_web_server().await {
        Ok(()) => success!("Web server stopped."),
        Err(e) => error!("Cannot run web server: {}", e),
    }
}
