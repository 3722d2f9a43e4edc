//! warp server implementation.

use std::convert::Infallible;
use std::net::SocketAddr;

use thiserror::Error;
use warp::{Filter, Reply};

use crate::config::Config;
use crate::data::load_questions_or_placeholder;
use crate::ui::render_page;

use super::state::{ServerState, SharedState};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("could not bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: warp::Error,
    },
}

fn with_state(
    state: SharedState,
) -> impl Filter<Extract = (SharedState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

/// `GET /`, the only route.
pub fn routes(
    state: SharedState,
) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::get()
        .and(warp::path::end())
        .and(with_state(state))
        .map(review_page)
        .with(warp::log("exam_review::http"))
}

fn review_page(state: SharedState) -> impl Reply {
    tracing::debug!("rendering {} questions", state.store.len());
    warp::reply::html(render_page(&state.page, state.store.questions()).into_string())
}

/// Load the questions once, then serve them until Ctrl-C.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let store = load_questions_or_placeholder(&config.questions);
    let state = ServerState::new(store, config.page()).shared();

    let (addr, server) = warp::serve(routes(state))
        .try_bind_with_graceful_shutdown(config.addr(), shutdown_signal())
        .map_err(|source| ServerError::Bind {
            addr: config.addr(),
            source,
        })?;

    tracing::info!("Server listening on http://{addr}");
    server.await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            tracing::error!("could not listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    }
}
