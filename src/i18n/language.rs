use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportedLanguage {
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "en")]
    English,
}

const WEEKDAYS_PT: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl SupportedLanguage {
    pub fn all() -> &'static [SupportedLanguage] {
        &[SupportedLanguage::Portuguese, SupportedLanguage::English]
    }

    /// The clinic's default language (Brazilian Portuguese).
    pub fn default() -> Self {
        SupportedLanguage::Portuguese
    }

    pub fn code(&self) -> &'static str {
        match self {
            SupportedLanguage::Portuguese => "pt",
            SupportedLanguage::English => "en",
        }
    }

    /// Language identifier for Fluent bundles.
    pub fn lang_id(&self) -> LanguageIdentifier {
        match self {
            SupportedLanguage::Portuguese => "pt-BR".parse().unwrap(),
            SupportedLanguage::English => "en-US".parse().unwrap(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SupportedLanguage::Portuguese => "Português",
            SupportedLanguage::English => "English",
        }
    }

    /// Localized weekday name for an index counted from Sunday (0..6).
    pub fn weekday_name(&self, weekday_from_sunday: u8) -> &'static str {
        let names = match self {
            SupportedLanguage::Portuguese => &WEEKDAYS_PT,
            SupportedLanguage::English => &WEEKDAYS_EN,
        };
        names[usize::from(weekday_from_sunday) % 7]
    }

    /// Parse from an Accept-Language header, falling back to the default.
    pub fn from_accept_language(accept_language: &str) -> Self {
        for lang_part in accept_language.split(',') {
            let lang = lang_part.trim().split(';').next().unwrap_or("");
            let lang = lang.to_lowercase();

            if lang.starts_with("pt") {
                return SupportedLanguage::Portuguese;
            } else if lang.starts_with("en") {
                return SupportedLanguage::English;
            }
        }

        Self::default()
    }
}

impl Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for SupportedLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pt" | "pt-br" | "portuguese" | "português" => Ok(SupportedLanguage::Portuguese),
            "en" | "en-us" | "english" => Ok(SupportedLanguage::English),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_language_picks_first_supported() {
        assert_eq!(
            SupportedLanguage::from_accept_language("pt-BR,pt;q=0.9,en;q=0.8"),
            SupportedLanguage::Portuguese
        );
        assert_eq!(
            SupportedLanguage::from_accept_language("en-GB,en;q=0.9"),
            SupportedLanguage::English
        );
        assert_eq!(
            SupportedLanguage::from_accept_language("fr-FR,fr;q=0.9"),
            SupportedLanguage::Portuguese
        );
    }

    #[test]
    fn weekday_names_are_localized() {
        assert_eq!(SupportedLanguage::Portuguese.weekday_name(0), "domingo");
        assert_eq!(
            SupportedLanguage::Portuguese.weekday_name(3),
            "quarta-feira"
        );
        assert_eq!(SupportedLanguage::English.weekday_name(6), "Saturday");
    }
}
