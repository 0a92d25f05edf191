//! Fail-soft LLM client. Wraps an `LlmPort` so callers always get text back.
//!
//! Any backend failure is logged, reported on the status port, and turned into `""`.

use crate::domain::{CompletionRequest, LlmSettings, LlmStep, Notice, PromptMessage};
use crate::ports::{LlmPort, StatusPort};
use std::sync::Arc;
use tracing::{info, warn};

pub struct LlmClient {
    backend: Arc<dyn LlmPort>,
    settings: LlmSettings,
    status: Arc<dyn StatusPort>,
}

impl LlmClient {
    pub fn new(
        backend: Arc<dyn LlmPort>,
        settings: LlmSettings,
        status: Arc<dyn StatusPort>,
    ) -> Self {
        Self {
            backend,
            settings,
            status,
        }
    }

    /// Run one completion. Returns the generated text, or an empty string on failure.
    pub async fn complete(&self, step: LlmStep, messages: Vec<PromptMessage>) -> String {
        let request = CompletionRequest::new(&self.settings, messages);
        self.status.notify(Notice::LlmStarted { step });

        // Close the pending notice before logging; the console redraws it until then.
        match self.backend.complete(&request).await {
            Ok(text) => {
                self.status.notify(Notice::LlmFinished { step });
                info!(step = %step, len = text.len(), "LLM call succeeded");
                text
            }
            Err(e) => {
                self.status.notify(Notice::LlmFailed {
                    step,
                    reason: e.to_string(),
                });
                warn!(step = %step, error = %e, "LLM call failed, continuing with empty result");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockLlmAdapter;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStatus(Mutex<Vec<Notice>>);

    impl StatusPort for RecordingStatus {
        fn notify(&self, notice: Notice) {
            self.0.lock().unwrap().push(notice);
        }
    }

    fn settings() -> LlmSettings {
        LlmSettings {
            model: "gpt-4o-mini".to_string(),
            temperature: 1.0,
        }
    }

    #[tokio::test]
    async fn test_success_passes_text_through() {
        let backend = Arc::new(MockLlmAdapter::echo("bullet lists"));
        let status = Arc::new(RecordingStatus::default());
        let client = LlmClient::new(backend.clone(), settings(), status.clone());

        let text = client
            .complete(LlmStep::Analysis, vec![PromptMessage::user("corpus")])
            .await;

        assert_eq!(text, "bullet lists");
        let request = &backend.requests()[0];
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.temperature, 1.0);
        assert_eq!(
            *status.0.lock().unwrap(),
            vec![
                Notice::LlmStarted {
                    step: LlmStep::Analysis
                },
                Notice::LlmFinished {
                    step: LlmStep::Analysis
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_becomes_empty_string() {
        let backend = Arc::new(MockLlmAdapter::failing());
        let status = Arc::new(RecordingStatus::default());
        let client = LlmClient::new(backend.clone(), settings(), status.clone());

        let text = client
            .complete(LlmStep::Synthesis, vec![PromptMessage::user("corpus")])
            .await;

        assert!(text.is_empty());
        assert_eq!(backend.call_count(), 1);
        let notices = status.0.lock().unwrap();
        assert_eq!(notices.len(), 2);
        assert!(matches!(
            notices.last(),
            Some(Notice::LlmFailed {
                step: LlmStep::Synthesis,
                ..
            })
        ));
    }
}
