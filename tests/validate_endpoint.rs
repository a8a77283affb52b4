use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

use clinic_agenda_backend::app::create_router;
use clinic_agenda_backend::app_state::AppState;
use clinic_agenda_backend::config::{AppConfig, Config, Environment, ServerConfig};
use clinic_agenda_backend::i18n;
use clinic_agenda_backend::scheduling::{ClinicHours, SlotValidator};

async fn test_state() -> AppState {
    let env = Config {
        server: ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
        },
        app: AppConfig {
            name: "clinic-agenda-backend-test".to_string(),
            environment: Environment::Development,
        },
        clinic_hours: ClinicHours::default(),
    };
    let localizer = Arc::new(i18n::init_i18n().await.expect("locales must load"));
    let validator = Arc::new(SlotValidator::new(env.clinic_hours.clone()));
    AppState::new(env, localizer, validator)
}

fn post_validate(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/agenda/appointments/validate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// 2026-03-01 is a Sunday; the dates below are the Tuesday and Saturday of
// that week.
const TUESDAY: &str = "2026-03-03";
const SATURDAY: &str = "2026-03-07";
const SUNDAY: &str = "2026-03-01";

fn tuesday_morning_payload() -> Value {
    json!({
        "date": TUESDAY,
        "start_time": "08:00",
        "end_time": "08:30",
        "practitioner_id": Uuid::now_v7(),
        "availability_windows": [
            { "weekday": 2, "start": "08:00", "end": "12:00", "active": true }
        ],
        "blackout_periods": [],
        "existing_appointments": []
    })
}

#[tokio::test]
async fn free_in_hours_slot_is_accepted() {
    let app = create_router(test_state().await);

    let response = app.oneshot(post_validate(tuesday_morning_payload())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["valid"], json!(true));
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn before_opening_slot_is_refused_with_opening_time() {
    let app = create_router(test_state().await);

    let mut payload = tuesday_morning_payload();
    payload["start_time"] = json!("07:30");
    payload["end_time"] = json!("08:00");

    let response = app.oneshot(post_validate(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["valid"], json!(false));
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("08:00"), "got: {message}");
}

#[tokio::test]
async fn saturday_slot_past_closing_is_refused() {
    let app = create_router(test_state().await);

    // Saturday closes at 13:00 in the default table.
    let payload = json!({
        "date": SATURDAY,
        "start_time": "12:30",
        "end_time": "13:30",
        "practitioner_id": Uuid::now_v7(),
        "availability_windows": [
            { "weekday": 6, "start": "08:00", "end": "14:00", "active": true }
        ]
    });

    let response = app.oneshot(post_validate(payload)).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["valid"], json!(false));
    assert!(body["message"].as_str().unwrap().contains("13:00"));
}

#[tokio::test]
async fn sunday_is_refused_in_the_request_language() {
    let payload = json!({
        "date": SUNDAY,
        "start_time": "10:00",
        "end_time": "10:30",
        "practitioner_id": Uuid::now_v7()
    });

    // Default language (Portuguese)
    let app = create_router(test_state().await);
    let response = app.oneshot(post_validate(payload.clone())).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["valid"], json!(false));
    assert!(body["message"].as_str().unwrap().contains("domingos"));

    // English via Accept-Language
    let app = create_router(test_state().await);
    let request = Request::builder()
        .method("POST")
        .uri("/agenda/appointments/validate")
        .header(header::CONTENT_TYPE, "application/json")
        .header("Accept-Language", "en-US,en;q=0.9")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("Sundays"));
}

#[tokio::test]
async fn conflicting_slot_reports_the_booked_times() {
    let app = create_router(test_state().await);

    let payload = json!({
        "date": TUESDAY,
        "start_time": "14:30",
        "end_time": "15:30",
        "practitioner_id": Uuid::now_v7(),
        "availability_windows": [
            { "weekday": 2, "start": "08:00", "end": "18:00", "active": true }
        ],
        "existing_appointments": [
            {
                "id": Uuid::now_v7(),
                "date": TUESDAY,
                "start": "14:00",
                "end": "15:00",
                "status": "confirmed"
            }
        ]
    });

    let response = app.oneshot(post_validate(payload)).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["valid"], json!(false));
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("14:00 às 15:00"), "got: {message}");
}

#[tokio::test]
async fn editing_an_appointment_does_not_conflict_with_itself() {
    let app = create_router(test_state().await);
    let appointment_id = Uuid::now_v7();

    let payload = json!({
        "date": TUESDAY,
        "start_time": "14:00",
        "end_time": "15:00",
        "practitioner_id": Uuid::now_v7(),
        "availability_windows": [
            { "weekday": 2, "start": "08:00", "end": "18:00", "active": true }
        ],
        "existing_appointments": [
            {
                "id": appointment_id,
                "date": TUESDAY,
                "start": "14:00",
                "end": "15:00",
                "status": "scheduled"
            }
        ],
        "editing_appointment_id": appointment_id
    });

    let response = app.oneshot(post_validate(payload)).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["valid"], json!(true));
}

#[tokio::test]
async fn malformed_time_string_is_a_client_error() {
    let app = create_router(test_state().await);

    let mut payload = tuesday_morning_payload();
    payload["start_time"] = json!("25:99");

    let response = app.oneshot(post_validate(payload)).await.unwrap();
    assert!(
        response.status().is_client_error(),
        "got: {}",
        response.status()
    );
}

#[tokio::test]
async fn inverted_times_are_a_validation_error() {
    let app = create_router(test_state().await);

    let mut payload = tuesday_morning_payload();
    payload["start_time"] = json!("09:00");
    payload["end_time"] = json!("08:30");

    let response = app.oneshot(post_validate(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn clinic_hours_endpoint_exposes_the_policy() {
    let app = create_router(test_state().await);

    let request = Request::builder()
        .uri("/agenda/clinic-hours")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["weekday"]["opening"], json!("08:00"));
    assert_eq!(body["weekday"]["latest_start"], json!("20:30"));
    assert_eq!(body["saturday"]["closing"], json!("13:00"));
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = create_router(test_state().await);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], json!("ok"));
}

#[tokio::test]
async fn supported_languages_are_listed() {
    let app = create_router(test_state().await);

    let request = Request::builder()
        .uri("/i18n/languages")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["default_language"], json!("pt"));
    assert_eq!(body["languages"].as_array().unwrap().len(), 2);
}
