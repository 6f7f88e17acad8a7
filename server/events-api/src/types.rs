//! Request/response types for the events API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use event_engine::Event;

/// Body of POST /api/query. `query` is an Option so an absent field gets the
/// 400 contract body instead of a deserialization rejection.
#[derive(Deserialize)]
pub struct QueryRequest {
  #[serde(default)]
  pub query: Option<String>,
}

/// Body of POST /api/events.
#[derive(Deserialize)]
pub struct CriteriaRequest {
  #[serde(default)]
  pub criteria: Option<HashMap<String, bool>>,
}

#[derive(Serialize)]
pub struct EventsResponse {
  pub events: Vec<Event>,
}

#[derive(Serialize)]
pub struct ServiceInfo {
  pub message: &'static str,
}

#[derive(Serialize)]
pub struct Health {
  pub status: &'static str,
}

/// Fixed-message error body for 400/500 responses.
#[derive(Serialize)]
pub struct ErrorBody {
  pub error: &'static str,
}

impl ErrorBody {
  pub fn new(error: &'static str) -> Self {
    Self { error }
  }
}
