//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the pipeline calls into storage, the LLM backend and the console.

pub mod outbound;

pub use outbound::{ArticleSourcePort, LlmPort, OutputPort, StatusPort};
