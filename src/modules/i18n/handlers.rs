use axum::{extract::Request, response::Json};
use serde::Serialize;

use crate::i18n::SupportedLanguage;
use crate::middleware::LanguageExtractor;

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub is_default: bool,
}

#[derive(Debug, Serialize)]
pub struct SupportedLanguagesResponse {
    pub languages: Vec<LanguageInfo>,
    pub default_language: String,
}

fn language_info(language: SupportedLanguage) -> LanguageInfo {
    LanguageInfo {
        code: language.code().to_string(),
        name: language.name().to_string(),
        is_default: language == SupportedLanguage::default(),
    }
}

/// Languages the message catalog can answer in.
pub async fn get_supported_languages() -> Json<SupportedLanguagesResponse> {
    let languages = SupportedLanguage::all()
        .iter()
        .copied()
        .map(language_info)
        .collect();

    Json(SupportedLanguagesResponse {
        languages,
        default_language: SupportedLanguage::default().code().to_string(),
    })
}

/// The language the middleware detected for this request.
pub async fn get_current_language(req: Request) -> Json<LanguageInfo> {
    Json(language_info(req.get_language()))
}
