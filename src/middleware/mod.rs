pub mod language;
pub mod tracing;

pub use language::{language_middleware, LanguageExtractor};
pub use tracing::observability_middleware;
