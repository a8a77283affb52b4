use axum::{middleware, routing::get, Json, Router};
use serde_json::json;
use time::format_description::well_known::Rfc3339;

use crate::{
    app_state::AppState,
    middleware::{language_middleware, observability_middleware},
    modules::agenda::routes::agenda_routes,
    modules::i18n::routes::i18n_routes,
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
        .nest("/agenda", agenda_routes())
        .nest("/i18n", i18n_routes())
        .layer(middleware::from_fn(observability_middleware))
        .layer(middleware::from_fn(language_middleware))
        .with_state(state)
}

async fn hello() -> &'static str {
    "Clinic agenda backend says hello!\n"
}

async fn health_check() -> Json<serde_json::Value> {
    let telemetry_health = crate::telemetry::telemetry_health_check();

    let timestamp = time::OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();

    Json(json!({
        "status": "ok",
        "timestamp": timestamp,
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "telemetry": telemetry_health
        }
    }))
}
