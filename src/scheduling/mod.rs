mod models;
mod policy;
mod time_of_day;
mod validator;

pub use models::{
    AppointmentStatus, AvailabilityWindow, BlackoutPeriod, CandidateAppointment,
    ExistingAppointment,
};
pub use policy::{ClinicHours, DayHours};
pub use time_of_day::{ParseTimeOfDayError, TimeOfDay};
pub use validator::{
    check_availability, check_blackouts, check_clinic_hours, check_conflicts, SlotRejection,
    SlotValidator,
};
