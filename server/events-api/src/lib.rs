//! NYE Events API
//!
//! HTTP service answering event queries from the in-memory catalog.
//! Bind to 127.0.0.1 by default (put a proxy in front for public exposure).

mod handlers;
mod state;
mod types;

pub use handlers::{events_by_criteria, handle_panic, health, query, root};
pub use state::AppState;
