pub mod fluent_loader;
pub mod helpers;
pub mod language;
pub mod localizer;

pub use fluent_loader::FluentLoader;
pub use helpers::I18n;
pub use language::SupportedLanguage;
pub use localizer::{LocalizedString, Localizer};

use anyhow::Result;

/// Initialize the i18n system with the clinic's locales.
pub async fn init_i18n() -> Result<Localizer> {
    let mut loader = FluentLoader::new();

    // Portuguese (default) and English
    loader.load_locale(SupportedLanguage::Portuguese).await?;
    loader.load_locale(SupportedLanguage::English).await?;

    Ok(Localizer::new(loader))
}
