//! Binary entrypoint: read one JSON request from stdin, write one JSON
//! response to stdout.
//!
//! The request carries either a free-text `query` or a `criteria` flag map:
//!   {"query": "kid friendly"}         -> full query outcome
//!   {"criteria": {"isCruise": true}}  -> {"events": [...]}
//!
//! Uses the embedded catalog, or EVENTS_FILE when set — same as the server.

use serde::Deserialize;
use std::collections::HashMap;
use std::io::{self, Read, Write};

use event_engine::{Catalog, QueryEngine};

#[derive(Deserialize)]
struct Request {
  #[serde(default)]
  query: Option<String>,
  #[serde(default)]
  criteria: Option<HashMap<String, bool>>,
}

fn main() {
  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "event-query error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), Box<dyn std::error::Error>> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let request: Request = serde_json::from_str(&raw)?;

  let catalog = match std::env::var("EVENTS_FILE") {
    Ok(path) => Catalog::from_json_file(&path)?,
    Err(_) => Catalog::builtin()?,
  };
  let engine = QueryEngine::new(catalog);

  let json = if let Some(text) = request.query {
    serde_json::to_vec(&engine.handle_query(&text))?
  } else if let Some(criteria) = request.criteria {
    let events = engine.find_by_criteria(&criteria);
    serde_json::to_vec(&serde_json::json!({ "events": events }))?
  } else {
    return Err(r#"request must carry "query" or "criteria""#.into());
  };

  io::stdout().write_all(&json)?;
  Ok(())
}
