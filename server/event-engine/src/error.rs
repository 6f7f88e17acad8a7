//! Structured error types for catalog construction.

use thiserror::Error;

/// Why a catalog could not be built. All variants are fatal to startup.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("duplicate event id: {0}")]
  DuplicateId(u32),

  #[error("event {id}: {field} must not be empty")]
  EmptyField { id: u32, field: &'static str },

  #[error("read {path}: {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl CatalogError {
  pub fn empty_field(id: u32, field: &'static str) -> Self {
    Self::EmptyField { id, field }
  }

  pub fn read(path: impl Into<String>, source: std::io::Error) -> Self {
    Self::Read {
      path: path.into(),
      source,
    }
  }
}
