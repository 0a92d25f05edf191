//! Wiring & DI. Entry point: bootstrap adapters, inject into the pipeline, run once.
//! No business logic here; the run itself is delegated to PipelineService.

use dotenv::dotenv;
use newstrail::adapters::ai::OpenAiAdapter;
use newstrail::adapters::persistence::{FsArticleSource, FsOutputStore};
use newstrail::adapters::ui::ConsoleStatus;
use newstrail::domain::{DomainError, Notice};
use newstrail::ports::{ArticleSourcePort, LlmPort, OutputPort, StatusPort};
use newstrail::shared::config::AppConfig;
use newstrail::usecases::{LlmClient, PipelineService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    newstrail::adapters::ui::init_ui();
    let status: Arc<dyn StatusPort> = Arc::new(ConsoleStatus::new());

    if let Err(e) = run(Arc::clone(&status)).await {
        error!(error = %e, fatal = e.is_fatal(), "run aborted");
        status.notify(Notice::SetupFailed {
            reason: e.to_string(),
        });
        // Returning Err from main exits with status 1.
        anyhow::bail!("setup failed: {}", e);
    }
    Ok(())
}

/// Build adapters from configuration and run the pipeline. Errors here are fatal setup errors.
async fn run(status: Arc<dyn StatusPort>) -> Result<(), DomainError> {
    let cfg = AppConfig::load().map_err(|e| DomainError::Configuration(e.to_string()))?;
    let api_key = cfg.api_key()?.to_string();
    let settings = cfg.llm_settings();

    let articles_dir = cfg.articles_dir_or_default();
    let data_dir = cfg.data_dir_or_default();
    let output_dir = cfg.output_dir_or_default();
    info!(
        model = %settings.model,
        url = %cfg.ai_api_url_or_default(),
        articles = %articles_dir,
        data = %data_dir,
        output = %output_dir,
        "configuration loaded"
    );

    let llm: Arc<dyn LlmPort> = Arc::new(OpenAiAdapter::new(cfg.ai_api_url_or_default(), api_key));
    let articles: Arc<dyn ArticleSourcePort> = Arc::new(FsArticleSource::new(&articles_dir));
    let output: Arc<dyn OutputPort> = Arc::new(FsOutputStore::new(&data_dir, &output_dir));

    let pipeline = PipelineService::new(
        articles,
        LlmClient::new(llm, settings, Arc::clone(&status)),
        output,
        status,
    );

    let report = pipeline.run().await?;
    info!(
        stage = %report.stage,
        articles = report.article_count,
        analysis = ?report.analysis_path,
        article = ?report.article_path,
        "run finished"
    );
    Ok(())
}
