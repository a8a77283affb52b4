use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::debug;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::i18n::I18n;
use crate::scheduling::{
    AvailabilityWindow, BlackoutPeriod, CandidateAppointment, ClinicHours, ExistingAppointment,
    TimeOfDay,
};

use super::messages;

/// Candidate slot plus the snapshots the rules run against. The caller
/// fetches the practitioner's windows, blackout periods and booked
/// appointments before asking; the engine itself never touches storage.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = validate_slot_times))]
pub struct ValidateAppointmentPayload {
    pub date: Date,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub practitioner_id: Uuid,
    #[serde(default)]
    pub availability_windows: Vec<AvailabilityWindow>,
    #[serde(default)]
    pub blackout_periods: Vec<BlackoutPeriod>,
    #[serde(default)]
    pub existing_appointments: Vec<ExistingAppointment>,
    pub editing_appointment_id: Option<Uuid>,
}

fn validate_slot_times(payload: &ValidateAppointmentPayload) -> Result<(), ValidationError> {
    if payload.start_time < payload.end_time {
        Ok(())
    } else {
        Err(ValidationError::new("start_time must be before end_time"))
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateAppointmentResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Advisory pre-check for a proposed appointment slot. A `valid: false`
/// answer carries one localized message naming the first rule that failed.
pub async fn validate_appointment(
    State(state): State<AppState>,
    i18n: I18n,
    Json(payload): Json<ValidateAppointmentPayload>,
) -> AppResult<Json<ValidateAppointmentResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let candidate = CandidateAppointment {
        date: payload.date,
        start: payload.start_time,
        end: payload.end_time,
        practitioner_id: payload.practitioner_id,
        editing_appointment_id: payload.editing_appointment_id,
    };

    let outcome = state.validator.validate(
        &candidate,
        &payload.availability_windows,
        &payload.blackout_periods,
        &payload.existing_appointments,
    );

    match outcome {
        Ok(()) => Ok(Json(ValidateAppointmentResponse {
            valid: true,
            message: None,
        })),
        Err(rejection) => {
            debug!(
                practitioner = %candidate.practitioner_id,
                date = %candidate.date,
                ?rejection,
                "slot rejected"
            );
            Ok(Json(ValidateAppointmentResponse {
                valid: false,
                message: Some(messages::localize_rejection(&rejection, &i18n)),
            }))
        }
    }
}

/// The operating-hours table in effect, for booking UIs to render.
pub async fn clinic_hours(State(state): State<AppState>) -> Json<ClinicHours> {
    Json(state.validator.hours().clone())
}
