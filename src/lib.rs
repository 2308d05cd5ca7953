//! Multilingual translator service.
//!
//! Exposes text translation and language detection over a JSON HTTP API,
//! backed either by MarianMT models or by a demo phrase dictionary.

pub mod config;
pub mod detection;
pub mod engine;
pub mod error;
pub mod i18n;
pub mod routes;
pub mod state;
