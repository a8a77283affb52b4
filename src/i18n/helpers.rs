use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use fluent_bundle::FluentValue;
use std::collections::HashMap;

use crate::app_state::AppState;
use crate::i18n::{LocalizedString, Localizer, SupportedLanguage};

/// Extractor giving handlers access to localized messages in the language
/// the language middleware detected for the request.
pub struct I18n {
    pub localizer: std::sync::Arc<Localizer>,
    pub language: SupportedLanguage,
}

impl I18n {
    pub fn get(&self, key: &str) -> String {
        self.localizer.get_string_for_language(&self.language, key)
    }

    pub fn get_with_args(&self, key: &str, args: &HashMap<String, FluentValue>) -> String {
        self.localizer
            .get_message_with_language(&self.language, key, Some(args))
            .unwrap_or_else(|_| LocalizedString::new(key.to_string(), self.language))
            .into_string()
    }

    pub fn language(&self) -> SupportedLanguage {
        self.language
    }
}

impl FromRequestParts<AppState> for I18n {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let language = parts
            .extensions
            .get::<SupportedLanguage>()
            .copied()
            .unwrap_or(SupportedLanguage::default());

        Ok(I18n {
            localizer: state.localizer.clone(),
            language,
        })
    }
}

/// Helper macro for building FluentValue argument maps.
#[macro_export]
macro_rules! i18n_args {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut args = std::collections::HashMap::new();
        $(
            args.insert($key.to_string(), fluent_bundle::FluentValue::from($value));
        )*
        args
    }};
}
