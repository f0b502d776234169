use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::config::Config;
use crate::content_models::{AboutUs, FaqEntry, Service, ServicePageSettings};
use crate::content_store::CachedContent;
use crate::dispatcher::Dispatcher;
use crate::errors::AppError;
use crate::formatter;
use crate::models::ContactSuccess;
use crate::validation::validate_lead;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Sends rendered lead notifications.
    pub dispatcher: Dispatcher,
    /// Site content behind a bounded TTL cache.
    pub content: CachedContent,
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// POST /api/contact
///
/// Flow:
/// 1. Parse the body as JSON (`MalformedBody` on failure).
/// 2. Validate and normalize the lead (`ValidationFailed`).
/// 3. Render text and HTML bodies.
/// 4. Dispatch to the email capability (`ServiceUnavailable` / `SendFailed`).
///
/// The body is taken as raw bytes so parse failures map to our own error body
/// instead of the extractor's rejection.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ContactSuccess>, AppError> {
    tracing::info!("📨 Received contact submission ({} bytes)", body.len());

    let value: Value =
        serde_json::from_slice(&body).map_err(|e| AppError::MalformedBody(e.to_string()))?;

    let lead = validate_lead(&value).map_err(AppError::ValidationFailed)?;
    tracing::debug!(
        sector = %lead.sector,
        topics = lead.support_topics.len(),
        "Contact submission validated"
    );

    let message = formatter::compose(&lead);
    let ack = state.dispatcher.dispatch(message).await?;

    Ok(Json(ack))
}

/// GET /api/v1/services
pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Service>>, AppError> {
    let site = state.content.site().await?;
    Ok(Json(site.sorted_services()))
}

/// GET /api/v1/services/:slug
///
/// The not-found message comes from the service page settings.
pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Service>, AppError> {
    let site = state.content.site().await?;

    match site.service_by_slug(&slug) {
        Some(service) => Ok(Json(service.clone())),
        None => {
            tracing::debug!("Service not found: {}", slug);
            Err(AppError::NotFound(
                site.service_page_settings.not_found.title.clone(),
            ))
        }
    }
}

/// GET /api/v1/services/settings
pub async fn service_settings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ServicePageSettings>, AppError> {
    let site = state.content.site().await?;
    Ok(Json(site.service_page_settings.clone()))
}

/// GET /api/v1/faq
pub async fn list_faq(State(state): State<Arc<AppState>>) -> Result<Json<Vec<FaqEntry>>, AppError> {
    let site = state.content.site().await?;
    Ok(Json(site.faq_entries()))
}

/// GET /api/v1/about
pub async fn about_us(State(state): State<Arc<AppState>>) -> Result<Json<AboutUs>, AppError> {
    let site = state.content.site().await?;
    Ok(Json(site.about_us.clone()))
}
