//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ArticleLoad, CompletionRequest, DomainError, Notice, OutputKind};
use std::path::PathBuf;

/// Source of input articles (a folder of text files in production).
#[async_trait::async_trait]
pub trait ArticleSourcePort: Send + Sync {
    /// Human-readable location, used in operator messages.
    fn label(&self) -> String;

    /// Pre-flight check. Returns `ResourceNotFound` if the source is missing.
    async fn ensure_available(&self) -> Result<(), DomainError>;

    /// Scan the source. A missing source yields an empty load, not an error.
    /// Unreadable entries are reported in `ArticleLoad::skipped`.
    async fn load_articles(&self) -> Result<ArticleLoad, DomainError>;
}

/// LLM backend. One chat completion per call, no retries.
#[async_trait::async_trait]
pub trait LlmPort: Send + Sync {
    /// Send the request and return the generated text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError>;
}

/// Destination for generated text.
#[async_trait::async_trait]
pub trait OutputPort: Send + Sync {
    /// Write `content` to a new timestamped file for `kind`. Returns its path.
    async fn save(&self, kind: OutputKind, content: &str) -> Result<PathBuf, DomainError>;
}

/// Operator-visible status channel.
pub trait StatusPort: Send + Sync {
    fn notify(&self, notice: Notice);
}
