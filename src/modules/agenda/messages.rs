use crate::i18n::I18n;
use crate::i18n_args;
use crate::scheduling::SlotRejection;

/// Renders a rejection into the single user-facing message the booking UI
/// shows. Blackout periods carry free-text reasons entered by staff; those
/// are surfaced as-is, with a localized fallback when absent.
pub fn localize_rejection(rejection: &SlotRejection, i18n: &I18n) -> String {
    match rejection {
        SlotRejection::ClinicClosed => i18n.get("slot-clinic-closed"),
        SlotRejection::BeforeOpening { opening } => i18n.get_with_args(
            "slot-before-opening",
            &i18n_args! { "opening" => opening.to_string() },
        ),
        SlotRejection::AfterLastBookableStart { latest_start } => i18n.get_with_args(
            "slot-after-last-start",
            &i18n_args! { "latest" => latest_start.to_string() },
        ),
        SlotRejection::AfterClosing { closing } => i18n.get_with_args(
            "slot-after-closing",
            &i18n_args! { "closing" => closing.to_string() },
        ),
        SlotRejection::NoAvailabilityThisWeekday { weekday } => i18n.get_with_args(
            "slot-no-availability",
            &i18n_args! { "weekday" => i18n.language().weekday_name(*weekday) },
        ),
        SlotRejection::OutsideAvailabilityWindow => i18n.get("slot-outside-availability"),
        SlotRejection::BlackoutPeriod { reason } => reason
            .clone()
            .unwrap_or_else(|| i18n.get("slot-blackout")),
        SlotRejection::ConflictingAppointment { start, end } => i18n.get_with_args(
            "slot-conflict",
            &i18n_args! {
                "start" => start.to_string(),
                "end" => end.to_string(),
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{init_i18n, SupportedLanguage};
    use crate::scheduling::TimeOfDay;
    use std::sync::Arc;

    async fn i18n_for(language: SupportedLanguage) -> I18n {
        I18n {
            localizer: Arc::new(init_i18n().await.expect("locales must load")),
            language,
        }
    }

    fn t(raw: &str) -> TimeOfDay {
        raw.parse().unwrap()
    }

    #[tokio::test]
    async fn conflict_message_carries_the_booked_times() {
        let i18n = i18n_for(SupportedLanguage::Portuguese).await;
        let message = localize_rejection(
            &SlotRejection::ConflictingAppointment {
                start: t("14:00"),
                end: t("15:00"),
            },
            &i18n,
        );
        assert!(message.contains("14:00 às 15:00"), "got: {message}");
    }

    #[tokio::test]
    async fn weekday_name_follows_the_request_language() {
        let pt = i18n_for(SupportedLanguage::Portuguese).await;
        let message =
            localize_rejection(&SlotRejection::NoAvailabilityThisWeekday { weekday: 0 }, &pt);
        assert!(message.contains("domingo"), "got: {message}");

        let en = i18n_for(SupportedLanguage::English).await;
        let message =
            localize_rejection(&SlotRejection::NoAvailabilityThisWeekday { weekday: 0 }, &en);
        assert!(message.contains("Sunday"), "got: {message}");
    }

    #[tokio::test]
    async fn blackout_reason_text_is_surfaced_verbatim() {
        let i18n = i18n_for(SupportedLanguage::Portuguese).await;
        let message = localize_rejection(
            &SlotRejection::BlackoutPeriod {
                reason: Some("Férias".to_string()),
            },
            &i18n,
        );
        assert_eq!(message, "Férias");

        let fallback =
            localize_rejection(&SlotRejection::BlackoutPeriod { reason: None }, &i18n);
        assert_ne!(fallback, "slot-blackout");
        assert!(!fallback.is_empty());
    }

    #[tokio::test]
    async fn boundary_messages_embed_the_formatted_boundary() {
        let i18n = i18n_for(SupportedLanguage::Portuguese).await;

        let message =
            localize_rejection(&SlotRejection::BeforeOpening { opening: t("08:00") }, &i18n);
        assert!(message.contains("08:00"), "got: {message}");

        let message = localize_rejection(
            &SlotRejection::AfterLastBookableStart {
                latest_start: t("20:30"),
            },
            &i18n,
        );
        assert!(message.contains("20:30"), "got: {message}");

        let message =
            localize_rejection(&SlotRejection::AfterClosing { closing: t("21:00") }, &i18n);
        assert!(message.contains("21:00"), "got: {message}");
    }
}
