//! HTTP handlers for the events API.

use axum::response::IntoResponse;
use axum::{extract::State, http::StatusCode, Json};
use std::any::Any;
use std::sync::Arc;

use event_engine::QueryOutcome;

use crate::state::AppState;
use crate::types::{CriteriaRequest, ErrorBody, EventsResponse, Health, QueryRequest, ServiceInfo};

type ApiError = (StatusCode, Json<ErrorBody>);

pub async fn root() -> Json<ServiceInfo> {
  Json(ServiceInfo {
    message: "NYE Events API is running!",
  })
}

pub async fn health() -> Json<Health> {
  Json(Health { status: "healthy" })
}

/// POST /api/query: resolve one free-text query against the catalog.
pub async fn query(
  State(state): State<Arc<AppState>>,
  Json(payload): Json<QueryRequest>,
) -> Result<Json<QueryOutcome>, ApiError> {
  let text = match payload.query {
    Some(q) => q,
    None => {
      tracing::warn!("query: missing query field");
      return Err((StatusCode::BAD_REQUEST, Json(ErrorBody::new("Query is required"))));
    }
  };

  // An empty string is present, not missing: it reaches the engine and
  // resolves to the unknown prompt.
  let outcome = state.engine.handle_query(&text);
  tracing::debug!(kind = ?outcome.kind, hits = outcome.events.len(), "query handled");
  Ok(Json(outcome))
}

/// POST /api/events: structured filtering by attribute-equality criteria.
pub async fn events_by_criteria(
  State(state): State<Arc<AppState>>,
  Json(payload): Json<CriteriaRequest>,
) -> Result<Json<EventsResponse>, ApiError> {
  let criteria = match payload.criteria {
    Some(c) => c,
    None => {
      tracing::warn!("events: missing criteria field");
      return Err((StatusCode::BAD_REQUEST, Json(ErrorBody::new("Criteria is required"))));
    }
  };

  let events = state.engine.find_by_criteria(&criteria);
  tracing::debug!(flags = criteria.len(), hits = events.len(), "criteria filtered");
  Ok(Json(EventsResponse { events }))
}

/// Panic-to-500 mapping for the catch-panic layer; the generic body never
/// leaks internal detail.
pub fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> axum::response::Response {
  tracing::error!("handler panicked");
  (
    StatusCode::INTERNAL_SERVER_ERROR,
    Json(ErrorBody::new("Internal server error")),
  )
    .into_response()
}

#[cfg(test)]
mod tests {
  use super::*;
  use event_engine::{Catalog, QueryEngine};
  use std::collections::HashMap;

  fn test_state() -> State<Arc<AppState>> {
    let engine = QueryEngine::new(Catalog::builtin().unwrap());
    State(Arc::new(AppState { engine }))
  }

  #[tokio::test]
  async fn root_and_health_bodies_match_the_contract() {
    let Json(info) = root().await;
    assert_eq!(
      serde_json::to_value(&info).unwrap(),
      serde_json::json!({"message": "NYE Events API is running!"})
    );

    let Json(health) = health().await;
    assert_eq!(
      serde_json::to_value(&health).unwrap(),
      serde_json::json!({"status": "healthy"})
    );
  }

  #[tokio::test]
  async fn missing_query_field_is_a_400() {
    let result = query(test_state(), Json(QueryRequest { query: None })).await;
    let (status, Json(body)) = result.err().unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "Query is required");
  }

  #[tokio::test]
  async fn empty_query_string_reaches_the_engine() {
    let result = query(
      test_state(),
      Json(QueryRequest {
        query: Some(String::new()),
      }),
    )
    .await;
    let Json(outcome) = result.ok().unwrap();
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["type"], "unknown");
  }

  #[tokio::test]
  async fn family_query_returns_matched_events() {
    let result = query(
      test_state(),
      Json(QueryRequest {
        query: Some("kid friendly please".to_string()),
      }),
    )
    .await;
    let Json(outcome) = result.ok().unwrap();
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["type"], "family");
    assert!(!value["events"].as_array().unwrap().is_empty());
  }

  #[tokio::test]
  async fn missing_criteria_field_is_a_400() {
    let result = events_by_criteria(test_state(), Json(CriteriaRequest { criteria: None })).await;
    let (status, Json(body)) = result.err().unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "Criteria is required");
  }

  #[tokio::test]
  async fn empty_criteria_returns_every_event() {
    let state = test_state();
    let expected = state.0.engine.catalog().events().len();
    let result = events_by_criteria(
      state,
      Json(CriteriaRequest {
        criteria: Some(HashMap::new()),
      }),
    )
    .await;
    let Json(body) = result.ok().unwrap();
    assert_eq!(body.events.len(), expected);
  }

  #[tokio::test]
  async fn criteria_filtering_excludes_non_matching_events() {
    let criteria: HashMap<String, bool> =
      [("isCruise".to_string(), true)].into_iter().collect();
    let result = events_by_criteria(
      test_state(),
      Json(CriteriaRequest {
        criteria: Some(criteria),
      }),
    )
    .await;
    let Json(body) = result.ok().unwrap();
    assert!(!body.events.is_empty());
    for event in &body.events {
      assert!(event.has_flag("isCruise"));
    }
  }
}
