//! HTTP server exposing the item service as a REST API.

use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use std::{sync::Arc, time::Instant};
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument};

use crate::{
    middleware::{
        create_body_limit_layer, create_cors_layer, create_rate_limiter,
        error_logging_middleware, rate_limit_middleware, security_headers_middleware,
        AppRateLimiter,
    },
    model::{Item, ItemId},
    service::ItemService,
    settings::Settings,
    store::{InMemoryItemStore, ItemStore},
};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemService>,
    pub settings: Settings,
    pub started_at: Instant,
    pub rate_limiter: Option<Arc<AppRateLimiter>>,
}

impl AppState {
    /// State backed by a fresh in-memory store
    pub fn new(settings: Settings) -> Self {
        Self::with_store(settings, Arc::new(InMemoryItemStore::new()))
    }

    pub fn with_store(settings: Settings, store: Arc<dyn ItemStore>) -> Self {
        let rate_limiter = create_rate_limiter(&settings.http);
        Self {
            items: Arc::new(ItemService::new(store)),
            settings,
            started_at: Instant::now(),
            rate_limiter,
        }
    }
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    uptime_seconds: u64,
    item_count: usize,
}

/// Create the HTTP router with all endpoints and middleware
pub fn create_router(state: AppState) -> Router {
    let http = state.settings.http.clone();
    let rate_limiter = state.rate_limiter.clone();

    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(state);

    if let Some(rate_limiter) = rate_limiter {
        app = app.layer(middleware::from_fn_with_state(
            rate_limiter,
            rate_limit_middleware,
        ));
    }
    if http.enable_security_headers {
        app = app.layer(middleware::from_fn(security_headers_middleware));
    }
    app = app
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(TraceLayer::new_for_http());
    if http.enable_cors {
        app = app.layer(create_cors_layer(&http));
    }

    app.layer(create_body_limit_layer(http.max_request_size_kb))
}

/// Health check endpoint
#[instrument(skip(state))]
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        item_count: state.items.item_count(),
    })
}

/// List all items
#[instrument(skip(state))]
async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.items.get_all_items())
}

/// Fetch one item
#[instrument(skip(state))]
async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<Item>, StatusCode> {
    state
        .items
        .get_item_by_id(id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Create an item; any id in the payload is ignored
#[instrument(skip(state, item))]
async fn create_item(
    State(state): State<AppState>,
    Json(item): Json<Item>,
) -> (StatusCode, Json<Item>) {
    (StatusCode::CREATED, Json(state.items.create_item(item)))
}

/// Replace an existing item; never creates one
#[instrument(skip(state, item))]
async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    Json(item): Json<Item>,
) -> Result<Json<Item>, StatusCode> {
    state
        .items
        .update_item(id, item)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Delete an item
#[instrument(skip(state))]
async fn delete_item(State(state): State<AppState>, Path(id): Path<ItemId>) -> StatusCode {
    if state.items.delete_item(id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Start the HTTP server and wait for shutdown signal
pub async fn serve(settings: &Settings) -> Result<()> {
    let app = create_router(AppState::new(settings.clone()));

    let addr = (settings.server.host.as_str(), settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                settings.server.host, settings.server.port
            )
        })?;

    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
        .context("HTTP server error")?;

    info!("HTTP server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down gracefully"),
        _ = terminate => info!("Received SIGTERM, shutting down gracefully"),
    }
}
