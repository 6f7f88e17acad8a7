//! Shared application state.

use event_engine::QueryEngine;

/// Built once in `main`, shared behind an `Arc`. The engine (and the catalog
/// inside it) is read-only after construction, so no locking is needed.
pub struct AppState {
  pub engine: QueryEngine,
}
