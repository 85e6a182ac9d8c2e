mod error;
mod translator;

pub use error::TranslateError;
pub use translator::Translator;
