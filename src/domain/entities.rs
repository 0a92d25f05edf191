//! Domain entities. Pure data structures for the core business.
//!
//! No filesystem/HTTP types here, only paths and strings handed across ports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One input text file: its content plus the filename stem it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub source: String,
    pub text: String,
}

impl Article {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}

/// A file that matched the article extension but could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of one folder scan.
#[derive(Debug, Clone, Default)]
pub struct ArticleLoad {
    pub articles: Vec<Article>,
    pub skipped: Vec<SkippedFile>,
}

impl ArticleLoad {
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// All articles of a run rendered into the single string sent to the LLM.
///
/// Only constructible from a slice of articles, so `article_count` always
/// matches the number of entries in `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCorpus {
    text: String,
    article_count: usize,
}

impl ArticleCorpus {
    pub fn from_articles(articles: &[Article]) -> Self {
        let mut text = String::new();
        for article in articles {
            text.push_str(&format!(
                "(Journal: {}):\n{}\n\n",
                article.source, article.text
            ));
        }
        Self {
            text,
            article_count: articles.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn article_count(&self) -> usize {
        self.article_count
    }
}

/// Chat role. Only the two roles this pipeline sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Model configuration, built once at startup and passed to the LLM client.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmSettings {
    pub model: String,
    pub temperature: f32,
}

/// Everything the backend needs for one completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<PromptMessage>,
}

impl CompletionRequest {
    pub fn new(settings: &LlmSettings, messages: Vec<PromptMessage>) -> Self {
        Self {
            model: settings.model.clone(),
            temperature: settings.temperature,
            messages,
        }
    }
}

/// Purpose tag of a persisted output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Intermediate common/differ analysis.
    Analysis,
    /// Final composite article.
    Composite,
}

impl OutputKind {
    pub fn file_prefix(&self) -> &'static str {
        match self {
            OutputKind::Analysis => "common_differ",
            OutputKind::Composite => "newstrail_article",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Analysis => write!(f, "analysis"),
            OutputKind::Composite => write!(f, "composite article"),
        }
    }
}

/// Pipeline state. Transitions only move forward; `Failed` is reachable from `Init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Init,
    Loaded,
    Analyzed,
    Synthesized,
    Done,
    Failed,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PipelineStage::Init => "init",
            PipelineStage::Loaded => "loaded",
            PipelineStage::Analyzed => "analyzed",
            PipelineStage::Synthesized => "synthesized",
            PipelineStage::Done => "done",
            PipelineStage::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// How a completed run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub stage: PipelineStage,
    pub article_count: usize,
    pub analysis_path: Option<PathBuf>,
    pub article_path: Option<PathBuf>,
}

/// Which LLM call a notice refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmStep {
    Analysis,
    Synthesis,
}

impl fmt::Display for LlmStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmStep::Analysis => write!(f, "analysis"),
            LlmStep::Synthesis => write!(f, "synthesis"),
        }
    }
}

/// Operator-visible status messages emitted by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SetupFailed { reason: String },
    ArticlesLoaded { count: usize },
    ArticleSkipped { path: PathBuf, reason: String },
    NoArticles { folder: String },
    LlmStarted { step: LlmStep },
    LlmFinished { step: LlmStep },
    LlmFailed { step: LlmStep, reason: String },
    OutputSaved { kind: OutputKind, path: PathBuf },
    WriteFailed { kind: OutputKind, reason: String },
    CompositeReady { text: String },
    SynthesisFailed,
}
