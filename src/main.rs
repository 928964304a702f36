//! Polls MCP Server - Main entry point
//!
//! Serves the polls application over MCP on stdio. Logs go to stderr.

use anyhow::Result;
use polls_mcp_server::repositories::{
    ChoiceRepository, InMemoryChoiceRepository, InMemoryQuestionRepository, QuestionRepository,
};
use polls_mcp_server::seed::{apply_seed, load_seed_file};
use polls_mcp_server::{
    Clock, Config, MetricsTracker, PollService, PollServiceImpl, PollsMcpServer, SystemClock,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Config loads before logging because LOG_LEVEL comes from it; report its failure on stderr directly
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // stdout is reserved for MCP traffic
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let question_repo = Arc::new(InMemoryQuestionRepository::new()) as Arc<dyn QuestionRepository>;
    let choice_repo = Arc::new(InMemoryChoiceRepository::new()) as Arc<dyn ChoiceRepository>;
    let clock = Arc::new(SystemClock) as Arc<dyn Clock>;
    let metrics = MetricsTracker::new();

    let service = Arc::new(PollServiceImpl::new(
        question_repo,
        choice_repo,
        clock,
        metrics.clone(),
        config.max_text_length,
    )) as Arc<dyn PollService>;

    if let Some(path) = &config.seed_file {
        let seed = load_seed_file(path).map_err(|e| {
            error!("Failed to load seed file: {}", e);
            e
        })?;
        let created = apply_seed(service.as_ref(), seed).await?;
        info!("Loaded {} question(s) from {}", created, path.display());
    }

    let server = PollsMcpServer::new(service);

    info!("Starting MCP server with stdio transport");
    polls_mcp_server::server::run_server(server).await?;

    info!("{}", metrics.summary());
    info!("Polls MCP Server shutdown complete");
    Ok(())
}
