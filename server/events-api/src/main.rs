//! Binary entrypoint for the events API.

use axum::{routing::get, routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use event_engine::{Catalog, QueryEngine};
use events_api::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "events_api=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "3000".into())
    .parse()
    .expect("PORT must be a valid u16");

  // Malformed catalog data aborts startup here.
  let catalog = match std::env::var("EVENTS_FILE") {
    Ok(path) => {
      tracing::info!(path = %path, "loading catalog from file");
      Catalog::from_json_file(&path)?
    }
    Err(_) => Catalog::builtin()?,
  };
  tracing::info!(events = catalog.events().len(), "catalog ready");

  let state = Arc::new(AppState {
    engine: QueryEngine::new(catalog),
  });

  let app = Router::new()
    .route("/", get(events_api::root))
    .route("/health", get(events_api::health))
    .route("/api/query", post(events_api::query))
    .route("/api/events", post(events_api::events_by_criteria))
    .layer(CorsLayer::permissive())
    .layer(CatchPanicLayer::custom(events_api::handle_panic))
    .with_state(state);

  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  tracing::info!("events-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
