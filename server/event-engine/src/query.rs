//! Free-text query matching: ordered keyword categories + response templates.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::types::{AttributeKey, Event, OutcomeKind, QueryOutcome};

/// Fallback when no keyword category fires.
const UNKNOWN_PROMPT: &str = "I can help you find the perfect NYE event. \
Are you interested in any specific type of venue (family-friendly, cruise, rooftop, etc.)?";

/// A keyword-triggered query category. Each variant carries its trigger
/// keywords, the attribute index it reads, and its response renderer, so a
/// category can never point at an index or template that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCategory {
  Family,
  Cruise,
}

impl QueryCategory {
  /// Evaluation order. First match wins: a query hitting keywords of several
  /// categories ("family cruise") resolves to the earliest listed one.
  pub const MATCH_ORDER: [QueryCategory; 2] = [QueryCategory::Family, QueryCategory::Cruise];

  /// Trigger keywords, lowercase. A category matches when any keyword is a
  /// substring of the lowercased query.
  pub fn keywords(self) -> &'static [&'static str] {
    match self {
      Self::Family => &["family", "kid", "children", "all ages"],
      Self::Cruise => &["cruise", "boat", "yacht"],
    }
  }

  /// The attribute index this category reads.
  pub fn attribute(self) -> AttributeKey {
    match self {
      Self::Family => AttributeKey::Family,
      Self::Cruise => AttributeKey::Cruise,
    }
  }

  /// Render the matched subsequence as display text.
  pub fn render(self, events: &[Event]) -> String {
    match self {
      Self::Family => render_list(
        events,
        "Here are some family-friendly options for New Year's Eve:",
        "* Includes soda/juice bar for minors and regular bar for 21+ *",
      ),
      Self::Cruise => render_list(
        events,
        "Here are our NYE cruise celebrations:",
        "* Full dinner buffet included *",
      ),
    }
  }
}

/// Shared list layout: header line, then one title/url/note block per event.
fn render_list(events: &[Event], header: &str, note: &str) -> String {
  let items: Vec<String> = events
    .iter()
    .map(|e| format!("\n- {}\n  {}\n  {}", e.title, e.url, note))
    .collect();
  format!("\n{}\n{}", header, items.join("\n"))
}

/// Matches free text against the catalog. Holds the catalog it was built
/// with; construct one per catalog instead of reaching for shared globals.
#[derive(Debug)]
pub struct QueryEngine {
  catalog: Catalog,
}

impl QueryEngine {
  pub fn new(catalog: Catalog) -> Self {
    Self { catalog }
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  /// Resolve one free-text query.
  ///
  /// Deterministic: same text + same catalog always gives the same outcome.
  /// Empty input matches no keyword (a non-empty keyword is never a
  /// substring of "") and falls through to the unknown prompt.
  pub fn handle_query(&self, text: &str) -> QueryOutcome {
    let q = text.to_lowercase();

    for category in QueryCategory::MATCH_ORDER {
      if category.keywords().iter().any(|kw| q.contains(kw)) {
        let events: Vec<Event> = self
          .catalog
          .with_attribute(category.attribute())
          .into_iter()
          .cloned()
          .collect();
        let response = category.render(&events);
        return QueryOutcome {
          kind: category.attribute().into(),
          events,
          response,
        };
      }
    }

    QueryOutcome {
      kind: OutcomeKind::Unknown,
      events: Vec::new(),
      response: UNKNOWN_PROMPT.to_string(),
    }
  }

  /// Structured filtering: raw ordered subsequence, no templated response.
  pub fn find_by_criteria(&self, criteria: &HashMap<String, bool>) -> Vec<Event> {
    self.catalog.find_by_criteria(criteria)
  }
}
