use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{clinic_hours, validate_appointment};
use crate::app_state::AppState;

pub fn agenda_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments/validate", post(validate_appointment))
        .route("/clinic-hours", get(clinic_hours))
}
