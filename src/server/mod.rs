//! HTTP server for the review page.

mod server;
mod state;

pub use server::{routes, run, ServerError};
pub use state::{ServerState, SharedState};
