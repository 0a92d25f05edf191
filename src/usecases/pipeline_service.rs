//! Pipeline service. Orchestrates the load -> analyze -> synthesize -> persist run.
//!
//! Coordinates between article source (input), LLM client (generation), output store
//! (files) and status port (operator messages).

use crate::domain::{
    ArticleCorpus, DomainError, LlmStep, Notice, OutputKind, PipelineStage, RunReport,
};
use crate::ports::{ArticleSourcePort, OutputPort, StatusPort};
use crate::usecases::llm_client::LlmClient;
use crate::usecases::prompts::{analysis_prompt, synthesis_prompt};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Service for one composite-article run.
///
/// Orchestrates the flow:
/// 1. Check the article source exists, then scan it
/// 2. Ask the LLM for common/divergent points and save them
/// 3. Ask the LLM for the composite article, primed with step 2
/// 4. Save the composite article if one was produced
pub struct PipelineService {
    articles: Arc<dyn ArticleSourcePort>,
    llm: LlmClient,
    output: Arc<dyn OutputPort>,
    status: Arc<dyn StatusPort>,
}

impl PipelineService {
    pub fn new(
        articles: Arc<dyn ArticleSourcePort>,
        llm: LlmClient,
        output: Arc<dyn OutputPort>,
        status: Arc<dyn StatusPort>,
    ) -> Self {
        Self {
            articles,
            llm,
            output,
            status,
        }
    }

    /// Run the pipeline once.
    ///
    /// Returns `Err` only for setup failures (missing source, failed scan); the
    /// stage is then `Failed` and nothing was sent to the LLM. Every other outcome,
    /// including an empty folder or a failed synthesis, ends in `Done`.
    pub async fn run(&self) -> Result<RunReport, DomainError> {
        let mut report = RunReport {
            stage: PipelineStage::Init,
            article_count: 0,
            analysis_path: None,
            article_path: None,
        };

        // INIT -> LOADED
        if let Err(e) = self.articles.ensure_available().await {
            self.transition(&mut report, PipelineStage::Failed);
            error!(error = %e, "article source unavailable");
            return Err(e);
        }
        let load = match self.articles.load_articles().await {
            Ok(load) => load,
            Err(e) => {
                self.transition(&mut report, PipelineStage::Failed);
                error!(error = %e, "article scan failed");
                return Err(e);
            }
        };
        for skipped in &load.skipped {
            self.status.notify(Notice::ArticleSkipped {
                path: skipped.path.clone(),
                reason: skipped.reason.clone(),
            });
        }
        report.article_count = load.article_count();
        self.transition(&mut report, PipelineStage::Loaded);

        // LOADED -> DONE (nothing to merge)
        if load.is_empty() {
            let folder = self.articles.label();
            info!(reason = %DomainError::EmptyInputSet(folder.clone()), "stopping early");
            self.status.notify(Notice::NoArticles { folder });
            self.transition(&mut report, PipelineStage::Done);
            return Ok(report);
        }
        self.status.notify(Notice::ArticlesLoaded {
            count: report.article_count,
        });

        // LOADED -> ANALYZED
        let corpus = ArticleCorpus::from_articles(&load.articles);
        let analysis = self
            .llm
            .complete(
                LlmStep::Analysis,
                analysis_prompt(corpus.text(), corpus.article_count()),
            )
            .await;
        if analysis.is_empty() {
            warn!("analysis is empty, synthesis will run without it");
        }
        report.analysis_path = self.persist(OutputKind::Analysis, &analysis).await;
        self.transition(&mut report, PipelineStage::Analyzed);

        // ANALYZED -> SYNTHESIZED
        let composite = self
            .llm
            .complete(
                LlmStep::Synthesis,
                synthesis_prompt(corpus.text(), &analysis, corpus.article_count()),
            )
            .await;
        self.transition(&mut report, PipelineStage::Synthesized);

        // SYNTHESIZED -> DONE
        if composite.is_empty() {
            self.status.notify(Notice::SynthesisFailed);
        } else {
            self.status.notify(Notice::CompositeReady {
                text: composite.clone(),
            });
            report.article_path = self.persist(OutputKind::Composite, &composite).await;
        }
        self.transition(&mut report, PipelineStage::Done);

        Ok(report)
    }

    /// Best-effort save: failures are reported and swallowed.
    async fn persist(&self, kind: OutputKind, content: &str) -> Option<PathBuf> {
        match self.output.save(kind, content).await {
            Ok(path) => {
                self.status.notify(Notice::OutputSaved {
                    kind,
                    path: path.clone(),
                });
                Some(path)
            }
            Err(e) => {
                warn!(kind = %kind, error = %e, "failed to save output");
                self.status.notify(Notice::WriteFailed {
                    kind,
                    reason: e.to_string(),
                });
                None
            }
        }
    }

    fn transition(&self, report: &mut RunReport, next: PipelineStage) {
        info!(from = %report.stage, to = %next, "pipeline stage");
        report.stage = next;
    }
}
