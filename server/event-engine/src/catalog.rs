//! Event catalog: validated records plus derived category/attribute indices.
//!
//! Built once at process start and never mutated afterward, so reads are safe
//! to share across requests without locking.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::data;
use crate::error::CatalogError;
use crate::types::{AttributeKey, Event};

/// The complete, read-only set of event records with two derived indices:
/// category label -> positions, and attribute key -> positions. Indices hold
/// positions into `events`, so they stay consistent with the records by
/// construction.
#[derive(Debug)]
pub struct Catalog {
  events: Vec<Event>,
  by_category: HashMap<String, Vec<usize>>,
  by_attribute: HashMap<AttributeKey, Vec<usize>>,
}

impl Catalog {
  /// Validate records and derive both indices.
  ///
  /// Fails on duplicate ids or an empty `title`/`url` — malformed source data
  /// is fatal to startup.
  pub fn new(events: Vec<Event>) -> Result<Self, CatalogError> {
    let mut seen = HashSet::new();
    for event in &events {
      if !seen.insert(event.id) {
        return Err(CatalogError::DuplicateId(event.id));
      }
      if event.title.trim().is_empty() {
        return Err(CatalogError::empty_field(event.id, "title"));
      }
      if event.url.trim().is_empty() {
        return Err(CatalogError::empty_field(event.id, "url"));
      }
    }

    let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();
    for (pos, event) in events.iter().enumerate() {
      by_category.entry(event.category.clone()).or_default().push(pos);
    }

    let mut by_attribute = HashMap::new();
    for key in AttributeKey::ALL {
      let positions: Vec<usize> = events
        .iter()
        .enumerate()
        .filter(|(_, e)| e.has_flag(key.flag()))
        .map(|(pos, _)| pos)
        .collect();
      by_attribute.insert(key, positions);
    }

    Ok(Self {
      events,
      by_category,
      by_attribute,
    })
  }

  /// The embedded event list.
  pub fn builtin() -> Result<Self, CatalogError> {
    Self::new(data::builtin_events())
  }

  /// Load a JSON array of event records from disk instead of the embedded
  /// list. Same validation as [`Catalog::new`].
  pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
      .map_err(|e| CatalogError::read(path.display().to_string(), e))?;
    let events: Vec<Event> = serde_json::from_str(&raw)?;
    Self::new(events)
  }

  /// Full ordered sequence, read-only.
  pub fn events(&self) -> &[Event] {
    &self.events
  }

  /// Ordered events sharing a category label.
  pub fn in_category(&self, label: &str) -> Vec<&Event> {
    self
      .by_category
      .get(label)
      .map(|positions| positions.iter().map(|&p| &self.events[p]).collect())
      .unwrap_or_default()
  }

  /// Ordered events from the precomputed index for `key`.
  pub fn with_attribute(&self, key: AttributeKey) -> Vec<&Event> {
    self
      .by_attribute
      .get(&key)
      .map(|positions| positions.iter().map(|&p| &self.events[p]).collect())
      .unwrap_or_default()
  }

  /// Ordered subsequence where every requested flag exists on the event and
  /// equals the requested value. An event missing a requested flag is
  /// excluded. Empty criteria returns the full catalog.
  pub fn find_by_criteria(&self, criteria: &HashMap<String, bool>) -> Vec<Event> {
    self
      .events
      .iter()
      .filter(|event| {
        criteria
          .iter()
          .all(|(flag, want)| event.attributes.get(flag) == Some(want))
      })
      .cloned()
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn make_event(id: u32, title: &str, category: &str, flags: &[(&str, bool)]) -> Event {
    Event {
      id,
      title: title.to_string(),
      url: format!("https://example.com/{}", id),
      category: category.to_string(),
      description: String::new(),
      attributes: flags.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
    }
  }

  fn fixture_catalog() -> Catalog {
    Catalog::new(vec![
      make_event(1, "BBQ Bash", "Family Friendly", &[("isFamily", true), ("hasAlcohol", true)]),
      make_event(2, "Harbor Cruise", "Cruise", &[("isCruise", true), ("hasAlcohol", true)]),
      make_event(3, "Skyline Roof", "Rooftop", &[("isRooftop", true)]),
      make_event(4, "Kids Countdown", "Family Friendly", &[("isFamily", true), ("hasBallDrop", true)]),
    ])
    .unwrap()
  }

  #[test]
  fn duplicate_id_is_rejected() {
    let err = Catalog::new(vec![
      make_event(1, "First", "A", &[]),
      make_event(1, "Second", "B", &[]),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("duplicate event id: 1"));
  }

  #[test]
  fn empty_title_is_rejected() {
    let err = Catalog::new(vec![make_event(5, "  ", "A", &[])]).unwrap_err();
    assert!(err.to_string().contains("title"));
  }

  #[test]
  fn attribute_index_matches_flags_in_order() {
    let catalog = fixture_catalog();
    let family: Vec<u32> = catalog
      .with_attribute(AttributeKey::Family)
      .iter()
      .map(|e| e.id)
      .collect();
    assert_eq!(family, vec![1, 4]);
    assert!(catalog.with_attribute(AttributeKey::Cruise).len() == 1);
  }

  #[test]
  fn category_index_groups_by_label() {
    let catalog = fixture_catalog();
    let ids: Vec<u32> = catalog
      .in_category("Family Friendly")
      .iter()
      .map(|e| e.id)
      .collect();
    assert_eq!(ids, vec![1, 4]);
    assert!(catalog.in_category("Nope").is_empty());
  }

  #[test]
  fn empty_criteria_returns_whole_catalog_in_order() {
    let catalog = fixture_catalog();
    let all = catalog.find_by_criteria(&HashMap::new());
    let ids: Vec<u32> = all.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
  }

  #[test]
  fn criteria_require_every_flag_to_match() {
    let catalog = fixture_catalog();
    let criteria: HashMap<String, bool> =
      [("isFamily".to_string(), true), ("hasBallDrop".to_string(), true)]
        .into_iter()
        .collect();
    let hits = catalog.find_by_criteria(&criteria);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 4);
  }

  #[test]
  fn missing_flag_never_matches_false_either() {
    let catalog = fixture_catalog();
    // Event 3 has no isFamily flag at all; asking for isFamily=false must
    // still exclude it (absence is not equality).
    let criteria: HashMap<String, bool> = [("isFamily".to_string(), false)].into_iter().collect();
    assert!(catalog.find_by_criteria(&criteria).is_empty());
  }

  #[test]
  fn builtin_catalog_is_well_formed() {
    let catalog = Catalog::builtin().unwrap();
    assert!(!catalog.events().is_empty());
    for key in AttributeKey::ALL {
      for event in catalog.with_attribute(key) {
        assert!(event.has_flag(key.flag()));
      }
    }
  }
}
