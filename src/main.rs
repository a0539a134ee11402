use anyhow::Result;
use taskdash::commands::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging only when debug output is requested; normal runs
    // use plain console messages.
    if std::env::var("TASKDASH_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu().await
}
