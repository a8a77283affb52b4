use axum::{routing::get, Router};

use super::handlers::{get_current_language, get_supported_languages};
use crate::app_state::AppState;

pub fn i18n_routes() -> Router<AppState> {
    Router::new()
        .route("/languages", get(get_supported_languages))
        .route("/current-language", get(get_current_language))
}
