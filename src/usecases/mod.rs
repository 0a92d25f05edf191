//! Application use cases. Orchestrate domain logic via ports.

pub mod llm_client;
pub mod pipeline_service;
pub mod prompts;

pub use llm_client::LlmClient;
pub use pipeline_service::PipelineService;
