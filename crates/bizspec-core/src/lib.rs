pub mod error;
pub mod request;
pub mod section;
pub mod segment;
pub mod translation;

pub use error::BizspecError;
pub use request::TranslateRequest;
pub use section::Section;
pub use segment::segment;
pub use translation::Translation;
