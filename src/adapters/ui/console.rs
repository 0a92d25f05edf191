//! Implements StatusPort. Prints notices to stdout, spinner while an LLM call is pending.

use crate::domain::{Notice, OutputKind};
use crate::ports::StatusPort;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{Write, stdout};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Info => Color::Reset,
            Tone::Success => Color::Green,
            Tone::Warning => Color::Yellow,
            Tone::Error => Color::Red,
        }
    }
}

/// Text of a notice as shown to the operator.
fn render(notice: &Notice) -> (Tone, String) {
    match notice {
        Notice::SetupFailed { reason } => (Tone::Error, format!("Error: {}", reason)),
        Notice::ArticlesLoaded { count } => {
            (Tone::Info, format!("Loaded {} article(s).", count))
        }
        Notice::ArticleSkipped { path, reason } => (
            Tone::Warning,
            format!("Error reading file {}: {}", path.display(), reason),
        ),
        Notice::NoArticles { folder } => (
            Tone::Warning,
            format!("No articles were found in the specified folder ({}).", folder),
        ),
        Notice::LlmStarted { step } => (Tone::Info, format!("Requesting {}...", step)),
        Notice::LlmFinished { step } => (Tone::Success, format!("Received {}.", step)),
        Notice::LlmFailed { step, reason } => (
            Tone::Error,
            format!("Error calling LLM API during {}: {}", step, reason),
        ),
        Notice::OutputSaved {
            kind: OutputKind::Analysis,
            path,
        } => (
            Tone::Success,
            format!("Intermediate output saved to {}", path.display()),
        ),
        Notice::OutputSaved {
            kind: OutputKind::Composite,
            path,
        } => (
            Tone::Success,
            format!("Merged article saved to {}", path.display()),
        ),
        Notice::WriteFailed { kind, reason } => {
            (Tone::Error, format!("Error saving {}: {}", kind, reason))
        }
        Notice::CompositeReady { text } => (Tone::Info, format!("This is the article:\n{}", text)),
        Notice::SynthesisFailed => (
            Tone::Error,
            "Failed to generate the merged article.".to_string(),
        ),
    }
}

/// Console status adapter.
pub struct ConsoleStatus {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleStatus {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn start_spinner(&self, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(120));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn stop_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
            }
        }
    }

    fn print_line(tone: Tone, line: &str) {
        let mut out = stdout();
        let _ = out.execute(SetForegroundColor(tone.color()));
        let _ = out.execute(Print(line));
        let _ = out.execute(ResetColor);
        let _ = out.execute(Print("\n"));
        let _ = out.flush();
    }
}

impl Default for ConsoleStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusPort for ConsoleStatus {
    fn notify(&self, notice: Notice) {
        self.stop_spinner();
        let (tone, line) = render(&notice);
        match notice {
            Notice::LlmStarted { .. } => self.start_spinner(line),
            _ => Self::print_line(tone, &line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LlmStep;
    use std::path::PathBuf;

    #[test]
    fn test_render_saved_paths() {
        let (tone, line) = render(&Notice::OutputSaved {
            kind: OutputKind::Analysis,
            path: PathBuf::from("data/common_differ_20240101_000000.txt"),
        });
        assert_eq!(tone, Tone::Success);
        assert_eq!(
            line,
            "Intermediate output saved to data/common_differ_20240101_000000.txt"
        );

        let (_, line) = render(&Notice::OutputSaved {
            kind: OutputKind::Composite,
            path: PathBuf::from("output/newstrail_article_20240101_000000.txt"),
        });
        assert_eq!(
            line,
            "Merged article saved to output/newstrail_article_20240101_000000.txt"
        );
    }

    #[test]
    fn test_render_failures() {
        let (tone, line) = render(&Notice::SynthesisFailed);
        assert_eq!(tone, Tone::Error);
        assert_eq!(line, "Failed to generate the merged article.");

        let (tone, line) = render(&Notice::LlmFailed {
            step: LlmStep::Analysis,
            reason: "API error 401".to_string(),
        });
        assert_eq!(tone, Tone::Error);
        assert!(line.contains("analysis"));
        assert!(line.contains("401"));
    }

    #[test]
    fn test_spinner_cleared_by_next_notice() {
        let status = ConsoleStatus::new();
        status.notify(Notice::LlmStarted {
            step: LlmStep::Synthesis,
        });
        assert!(status.spinner.lock().unwrap().is_some());
        status.notify(Notice::SynthesisFailed);
        assert!(status.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_finished_call_clears_spinner() {
        let status = ConsoleStatus::new();
        status.notify(Notice::LlmStarted {
            step: LlmStep::Analysis,
        });
        status.notify(Notice::LlmFinished {
            step: LlmStep::Analysis,
        });
        assert!(status.spinner.lock().unwrap().is_none());

        let (tone, line) = render(&Notice::LlmFinished {
            step: LlmStep::Analysis,
        });
        assert_eq!(tone, Tone::Success);
        assert_eq!(line, "Received analysis.");
    }
}
