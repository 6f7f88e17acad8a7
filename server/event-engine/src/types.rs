//! Core types for the event engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Event record (JSON contract — stored and served as-is)
// ---------------------------------------------------------------------------

/// One advertised NYE gathering. `attributes` is open-ended: any flag name is
/// permitted, but only the four [`AttributeKey`] flags drive built-in indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
  pub id: u32,
  pub title: String,
  pub url: String,
  pub category: String,
  pub description: String,
  #[serde(default)]
  pub attributes: HashMap<String, bool>,
}

impl Event {
  /// True if the named flag is present and set.
  pub fn has_flag(&self, flag: &str) -> bool {
    self.attributes.get(flag) == Some(&true)
  }
}

// ---------------------------------------------------------------------------
// Attribute index keys
// ---------------------------------------------------------------------------

/// The four flag-backed indices. A closed enum rather than a string key, so
/// lookups cannot name an index that was never built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKey {
  Family,
  BallDrop,
  Rooftop,
  Cruise,
}

impl AttributeKey {
  pub const ALL: [AttributeKey; 4] = [
    AttributeKey::Family,
    AttributeKey::BallDrop,
    AttributeKey::Rooftop,
    AttributeKey::Cruise,
  ];

  /// The event flag that feeds this index.
  pub fn flag(self) -> &'static str {
    match self {
      Self::Family => "isFamily",
      Self::BallDrop => "hasBallDrop",
      Self::Rooftop => "isRooftop",
      Self::Cruise => "isCruise",
    }
  }
}

// ---------------------------------------------------------------------------
// Query outcome (JSON contract — what /api/query returns)
// ---------------------------------------------------------------------------

/// The `type` field of a query outcome: a matched attribute key, or
/// `unknown` when no keyword category fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OutcomeKind {
  Family,
  BallDrop,
  Rooftop,
  Cruise,
  Unknown,
}

impl From<AttributeKey> for OutcomeKind {
  fn from(key: AttributeKey) -> Self {
    match key {
      AttributeKey::Family => Self::Family,
      AttributeKey::BallDrop => Self::BallDrop,
      AttributeKey::Rooftop => Self::Rooftop,
      AttributeKey::Cruise => Self::Cruise,
    }
  }
}

/// Result of matching one free-text query against the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
  #[serde(rename = "type")]
  pub kind: OutcomeKind,
  pub events: Vec<Event>,
  pub response: String,
}
