use axum::{Extension, Router, routing::get};
use std::{future::Future, net::SocketAddr, str::FromStr, sync::Arc};
use tokio::net::TcpListener;

use crate::{
    Res,
    api::{self, FrontEnd},
    cocktaildb::{CocktailDb, RecipeSource},
    config, info,
    management::{App, Clock, SystemTime},
};

pub fn router<S: RecipeSource>(state: Arc<FrontEnd<S>>) -> Router {
    Router::new()
        .route("/", get(api::index::<S>))
        .route("/search", get(api::search::<S>))
        .route("/letter/{letter}", get(api::letter::<S>))
        .route("/recipe/{id}", get(api::recipe::<S>))
        .route("/close", get(api::close::<S>))
        .route("/action/{name}", get(api::action::<S>))
        .route("/google", get(api::google::<S>))
        .route("/clock", get(api::clock::<S>))
        .route("/health", get(api::health))
        .layer(Extension(state))
}

/// Serves `state` on an already bound listener until `shutdown` resolves.
pub async fn serve<S, F>(listener: TcpListener, state: Arc<FrontEnd<S>>, shutdown: F) -> Res<()>
where
    S: RecipeSource,
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Starts the front end on `SERVER_ADDRESS` and runs until Ctrl-C.
///
/// The clock starts with the server and is stopped once the server has shut
/// down.
pub async fn start_web_server() -> Res<()> {
    let addr = SocketAddr::from_str(&config::server_addr())?;

    let (mut clock, clock_rx) = Clock::start_with_channel(SystemTime);
    let app = App::new(CocktailDb::from_env(), config::default_letter());
    let state = Arc::new(FrontEnd::new(app, clock_rx, config::search_engine_url()));

    let listener = TcpListener::bind(&addr).await?;
    info!("Serving cocktails on http://{}", addr);

    let result = serve(listener, state, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await;

    clock.stop().await;
    result
}
