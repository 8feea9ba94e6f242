//! Generative-AI photo editor adapter
//!
//! Turns an uploaded photo plus a short instruction into a Gemini image
//! generation request (localized edit, background replacement, filter or
//! global adjustment) and interprets the response into a `data:` URL or a
//! typed error.

pub mod ai;
pub mod config;
pub mod editor;
pub mod encode;
pub mod error;
pub mod interpret;
pub mod presets;
pub mod prompts;

pub use config::Session;
pub use editor::PhotoEditor;
pub use encode::ImageFile;
pub use error::{Error, Result};
pub use prompts::{EditMode, Hotspot};
