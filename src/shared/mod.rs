//! Cross-cutting helpers: configuration and file-name timestamps.

pub mod config;
pub mod time;
