//! Language registry and language types.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the 21 supported languages
//! - `language`: Validated `Language` value type
//! - `strings`: Per-language localized strings
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Language, LanguageRegistry};
//!
//! let spanish = Language::from_code("es")?;
//! assert!(LanguageRegistry::get().is_supported("ja"));
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LanguageStrings;
