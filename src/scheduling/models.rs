use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use super::time_of_day::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

/// One recurring weekly availability window of a practitioner.
///
/// A practitioner may have several windows on the same weekday, e.g. a
/// morning and an evening block. `weekday` is 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub weekday: u8,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub active: bool,
}

/// A requested time-off block. Only periods with `approved == true` block
/// scheduling; both interval ends are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackoutPeriod {
    pub start_date: Date,
    pub end_date: Date,
    pub approved: bool,
    pub reason: Option<String>,
}

/// An appointment already on the practitioner's agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingAppointment {
    pub id: Uuid,
    pub date: Date,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub status: AppointmentStatus,
}

/// The slot being proposed for booking.
///
/// When an existing appointment is being rescheduled,
/// `editing_appointment_id` names it so it does not conflict with itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateAppointment {
    pub date: Date,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub practitioner_id: Uuid,
    pub editing_appointment_id: Option<Uuid>,
}

impl CandidateAppointment {
    /// Weekday index of the candidate date, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        self.date.weekday().number_days_from_sunday()
    }
}
