//! Mock LLM adapter for testing without API calls.
//!
//! Replies from a fixed script and records every request it receives.

use crate::domain::{CompletionRequest, DomainError};
use crate::ports::LlmPort;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// What the mock answers for one call.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Fail(String),
}

/// Mock LLM adapter.
///
/// Call `n` gets `script[n]`; once the script runs out the last entry repeats.
pub struct MockLlmAdapter {
    script: Vec<MockReply>,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmAdapter {
    /// Answer every call with the same text.
    pub fn echo(text: impl Into<String>) -> Self {
        Self::scripted(vec![MockReply::Text(text.into())])
    }

    /// Fail every call.
    pub fn failing() -> Self {
        Self::scripted(vec![MockReply::Fail("[MOCK] simulated outage".to_string())])
    }

    pub fn scripted(script: Vec<MockReply>) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of `complete` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Copies of every request received, in call order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Default for MockLlmAdapter {
    fn default() -> Self {
        Self::echo("[MOCK] generated text")
    }
}

#[async_trait::async_trait]
impl LlmPort for MockLlmAdapter {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        info!(
            call = n,
            messages = request.messages.len(),
            "[MOCK] Simulating chat completion"
        );

        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let reply = self
            .script
            .get(n)
            .or_else(|| self.script.last())
            .cloned()
            .unwrap_or_else(|| MockReply::Fail("[MOCK] empty script".to_string()));

        match reply {
            MockReply::Text(text) => Ok(text),
            MockReply::Fail(reason) => Err(DomainError::ExternalService(reason)),
        }
    }
}
