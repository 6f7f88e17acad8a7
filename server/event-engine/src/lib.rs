//! NYE Events Query Engine — deterministic keyword matching over a static
//! event catalog.
//!
//! Holds the event records with derived category/attribute indices, matches
//! free-text queries against ordered keyword categories, and filters events
//! by attribute-equality criteria.
//!
//! No NLP models, no DB, no network; pure in-memory lookups plus optional
//! JSON-file loading at startup.

pub mod catalog;
pub mod data;
pub mod error;
pub mod query;
pub mod types;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use query::{QueryCategory, QueryEngine};
pub use types::{AttributeKey, Event, OutcomeKind, QueryOutcome};
