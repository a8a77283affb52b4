use serde::{Deserialize, Serialize};

use super::time_of_day::TimeOfDay;

/// Operating envelope for a single weekday bucket.
///
/// `latest_start` is the last time an appointment may begin, normally the
/// closing time minus the shortest session length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub opening: TimeOfDay,
    pub latest_start: TimeOfDay,
    pub closing: TimeOfDay,
}

impl DayHours {
    /// Builds a bucket, enforcing `opening <= latest_start <= closing`.
    pub fn new(opening: TimeOfDay, latest_start: TimeOfDay, closing: TimeOfDay) -> Option<Self> {
        if opening <= latest_start && latest_start <= closing {
            Some(Self {
                opening,
                latest_start,
                closing,
            })
        } else {
            None
        }
    }
}

/// Per-weekday clinic operating hours.
///
/// Sundays are closed, Saturdays run a shorter window, and Monday through
/// Friday share one bucket. Owned by the validator as an immutable value so
/// a clinic can change its hours through configuration alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicHours {
    pub weekday: DayHours,
    pub saturday: DayHours,
}

impl ClinicHours {
    /// Resolves the bucket for a weekday index (0 = Sunday .. 6 = Saturday).
    /// Returns `None` when the clinic is closed that day.
    pub fn hours_for(&self, weekday_from_sunday: u8) -> Option<&DayHours> {
        match weekday_from_sunday {
            0 => None,
            6 => Some(&self.saturday),
            _ => Some(&self.weekday),
        }
    }
}

impl Default for ClinicHours {
    fn default() -> Self {
        let t = |hour, minute| TimeOfDay::new(hour, minute).expect("static clinic hours");
        Self {
            weekday: DayHours::new(t(8, 0), t(20, 30), t(21, 0)).expect("static clinic hours"),
            saturday: DayHours::new(t(8, 0), t(12, 30), t(13, 0)).expect("static clinic hours"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(raw: &str) -> TimeOfDay {
        raw.parse().unwrap()
    }

    #[test]
    fn day_hours_enforce_ordering() {
        assert!(DayHours::new(t("08:00"), t("20:30"), t("21:00")).is_some());
        assert!(DayHours::new(t("08:00"), t("21:30"), t("21:00")).is_none());
        assert!(DayHours::new(t("09:00"), t("08:30"), t("21:00")).is_none());
    }

    #[test]
    fn sunday_has_no_hours() {
        let hours = ClinicHours::default();
        assert!(hours.hours_for(0).is_none());
    }

    #[test]
    fn saturday_uses_short_bucket() {
        let hours = ClinicHours::default();
        let saturday = hours.hours_for(6).unwrap();
        assert_eq!(saturday.closing, t("13:00"));

        for weekday in 1..=5 {
            let day = hours.hours_for(weekday).unwrap();
            assert_eq!(day.opening, t("08:00"));
            assert_eq!(day.latest_start, t("20:30"));
            assert_eq!(day.closing, t("21:00"));
        }
    }
}
