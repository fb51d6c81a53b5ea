//! HTTP API Layer
//!
//! This crate provides the REST API for the car insurance system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for the car registry and health checks
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! The router is built over a [`domain_registry::RegistryStore`] trait
//! object, so the same surface serves the PostgreSQL adapter in production
//! and an in-memory store in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(store);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_registry::{RegistryService, RegistryStore};

use crate::handlers::{cars, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: RegistryService,
    pub store: Arc<dyn RegistryStore>,
}

/// Creates the main API router
pub fn create_router(store: Arc<dyn RegistryStore>) -> Router {
    let state = AppState {
        registry: RegistryService::new(store.clone()),
        store,
    };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let car_routes = Router::new()
        .route("/", get(cars::list_cars))
        .route("/", post(cars::create_car))
        .route("/:id/insurance-valid", get(cars::insurance_valid))
        .route("/:id/policies", post(cars::create_policy))
        .route("/:id/claims", post(cars::create_claim))
        .route("/:id/history", get(cars::history));

    Router::new()
        .merge(public_routes)
        .nest("/api/cars", car_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
