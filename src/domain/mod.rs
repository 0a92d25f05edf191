//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    Article, ArticleCorpus, ArticleLoad, CompletionRequest, LlmSettings, LlmStep, Notice,
    OutputKind, PipelineStage, PromptMessage, Role, RunReport, SkippedFile,
};
pub use errors::DomainError;
