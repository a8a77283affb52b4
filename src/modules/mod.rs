pub mod agenda;
pub mod i18n;
