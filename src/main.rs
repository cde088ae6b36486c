//! blog-summarizer binary.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use blog_summarizer::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    Cli::parse().run().await
}
