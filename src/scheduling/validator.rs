use tracing::debug;

use super::models::{
    AppointmentStatus, AvailabilityWindow, BlackoutPeriod, CandidateAppointment,
    ExistingAppointment,
};
use super::policy::ClinicHours;
use super::time_of_day::TimeOfDay;

/// Why a candidate slot was refused.
///
/// Rejections are ordinary data, not errors: the engine never fails, it
/// answers. Each variant carries what the message layer needs to tell the
/// user exactly which boundary was violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotRejection {
    /// The clinic does not open at all on the candidate weekday (Sundays).
    ClinicClosed,
    BeforeOpening { opening: TimeOfDay },
    AfterLastBookableStart { latest_start: TimeOfDay },
    AfterClosing { closing: TimeOfDay },
    /// The practitioner has no active window on this weekday (0 = Sunday).
    NoAvailabilityThisWeekday { weekday: u8 },
    OutsideAvailabilityWindow,
    /// An approved time-off block covers the candidate date.
    BlackoutPeriod { reason: Option<String> },
    /// Times of the already-booked appointment the candidate overlaps.
    ConflictingAppointment { start: TimeOfDay, end: TimeOfDay },
}

/// Rejects candidates outside the clinic's operating envelope for the
/// candidate's weekday.
pub fn check_clinic_hours(
    hours: &ClinicHours,
    candidate: &CandidateAppointment,
) -> Result<(), SlotRejection> {
    let day = hours
        .hours_for(candidate.weekday())
        .ok_or(SlotRejection::ClinicClosed)?;

    if candidate.start < day.opening {
        return Err(SlotRejection::BeforeOpening {
            opening: day.opening,
        });
    }
    if candidate.start > day.latest_start {
        return Err(SlotRejection::AfterLastBookableStart {
            latest_start: day.latest_start,
        });
    }
    if candidate.end > day.closing {
        return Err(SlotRejection::AfterClosing {
            closing: day.closing,
        });
    }
    Ok(())
}

/// Rejects candidates not fully contained in at least one active window of
/// the practitioner for that weekday. Windows are checked one by one and
/// never merged: a slot spanning two adjacent windows is refused.
pub fn check_availability(
    windows: &[AvailabilityWindow],
    candidate: &CandidateAppointment,
) -> Result<(), SlotRejection> {
    let weekday = candidate.weekday();
    let mut todays = windows
        .iter()
        .filter(|w| w.active && w.weekday == weekday)
        .peekable();

    if todays.peek().is_none() {
        return Err(SlotRejection::NoAvailabilityThisWeekday { weekday });
    }

    if todays.any(|w| w.start <= candidate.start && candidate.end <= w.end) {
        Ok(())
    } else {
        Err(SlotRejection::OutsideAvailabilityWindow)
    }
}

/// Rejects candidates whose date falls inside an approved blackout period.
/// The first matching period in input order wins, which keeps the outcome
/// deterministic when periods overlap.
pub fn check_blackouts(
    periods: &[BlackoutPeriod],
    candidate: &CandidateAppointment,
) -> Result<(), SlotRejection> {
    for period in periods.iter().filter(|p| p.approved) {
        if period.start_date <= candidate.date && candidate.date <= period.end_date {
            return Err(SlotRejection::BlackoutPeriod {
                reason: period.reason.clone(),
            });
        }
    }
    Ok(())
}

/// Rejects candidates overlapping a non-cancelled appointment on the same
/// date. When `editing_appointment_id` is set, that appointment is skipped
/// so an edit cannot collide with itself.
pub fn check_conflicts(
    existing: &[ExistingAppointment],
    candidate: &CandidateAppointment,
) -> Result<(), SlotRejection> {
    for appointment in existing {
        if appointment.date != candidate.date {
            continue;
        }
        if appointment.status == AppointmentStatus::Cancelled {
            continue;
        }
        if candidate.editing_appointment_id == Some(appointment.id) {
            continue;
        }
        // Inclusive on both ends: slots that merely touch at a shared
        // boundary minute count as overlapping, so back-to-back bookings
        // are refused. Changing this needs a product decision, not a code
        // cleanup.
        if candidate.start <= appointment.end && candidate.end >= appointment.start {
            return Err(SlotRejection::ConflictingAppointment {
                start: appointment.start,
                end: appointment.end,
            });
        }
    }
    Ok(())
}

/// Runs the slot rules in a fixed order, stopping at the first failure.
///
/// Clinic-wide limits come first, then the practitioner's own calendar,
/// then scarcity checks against booked slots. The order matters for the
/// messages: reporting a double-booking for a slot outside opening hours
/// would only confuse the user.
///
/// The validator is pure and works on caller-supplied snapshots; bookings
/// committed after the snapshot was taken are invisible to it, so the
/// storage layer remains the final authority on conflicts.
#[derive(Debug, Clone)]
pub struct SlotValidator {
    hours: ClinicHours,
}

impl SlotValidator {
    pub fn new(hours: ClinicHours) -> Self {
        Self { hours }
    }

    pub fn hours(&self) -> &ClinicHours {
        &self.hours
    }

    pub fn validate(
        &self,
        candidate: &CandidateAppointment,
        windows: &[AvailabilityWindow],
        blackouts: &[BlackoutPeriod],
        existing: &[ExistingAppointment],
    ) -> Result<(), SlotRejection> {
        check_clinic_hours(&self.hours, candidate)?;
        check_availability(windows, candidate)?;
        check_blackouts(blackouts, candidate)?;
        check_conflicts(existing, candidate)?;

        debug!(
            practitioner = %candidate.practitioner_id,
            date = %candidate.date,
            start = %candidate.start,
            end = %candidate.end,
            "slot accepted"
        );
        Ok(())
    }
}
