use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

use crate::i18n::SupportedLanguage;

/// Detects the request language and stores it in the request extensions,
/// where the `I18n` extractor picks it up.
pub async fn language_middleware(mut request: Request, next: Next) -> Response {
    let language = detect_language_from_headers(request.headers());
    request.extensions_mut().insert(language);
    next.run(request).await
}

/// Detect language from HTTP headers: an explicit `X-Language` header wins
/// over the browser's `Accept-Language`.
fn detect_language_from_headers(headers: &HeaderMap) -> SupportedLanguage {
    if let Some(lang_header) = headers.get("X-Language") {
        if let Ok(lang_str) = lang_header.to_str() {
            if let Ok(language) = lang_str.parse::<SupportedLanguage>() {
                return language;
            }
        }
    }

    if let Some(accept_language) = headers.get("Accept-Language") {
        if let Ok(accept_language_str) = accept_language.to_str() {
            return SupportedLanguage::from_accept_language(accept_language_str);
        }
    }

    SupportedLanguage::default()
}

/// Extension trait for reading the detected language off a request.
pub trait LanguageExtractor {
    fn get_language(&self) -> SupportedLanguage;
}

impl LanguageExtractor for Request {
    fn get_language(&self) -> SupportedLanguage {
        self.extensions()
            .get::<SupportedLanguage>()
            .copied()
            .unwrap_or(SupportedLanguage::default())
    }
}
