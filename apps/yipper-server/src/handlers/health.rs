//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use yipper_shared::ErrorResponse;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - returns server status once the store answers.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    if let Err(e) = state.store.ping().await {
        tracing::error!(error = %e, "Health check failed");
        return HttpResponse::ServiceUnavailable()
            .json(ErrorResponse::service_unavailable("yip store is not reachable"));
    }

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        service: state.service_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
