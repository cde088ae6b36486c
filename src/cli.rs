//! Command-line interface.
//!
//! All global options can be provided via flags or environment variables and
//! override values from the configuration file.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use crate::config::{load_settings, Settings};
use crate::pagination::PageRequest;
use crate::repository::{DieselDocumentRepository, DieselSummaryRepository};
use crate::server::{self, AppState};
use crate::services::ArchiveService;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory holding both databases
    #[arg(long, env = "BLOG_SUMMARIZER_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Fetch timeout in seconds
    #[arg(long, env = "BLOG_SUMMARIZER_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// User agent for fetches ("impersonate" rotates browser identities)
    #[arg(long, env = "BLOG_SUMMARIZER_USER_AGENT", global = true)]
    pub user_agent: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the web server
    Serve {
        /// Address to bind
        #[arg(long, env = "BLOG_SUMMARIZER_HOST")]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long, env = "BLOG_SUMMARIZER_PORT")]
        port: Option<u16>,
    },
    /// Scrape one URL and print the result as JSON
    Scrape {
        url: String,
    },
    /// Print one page of an archive as JSON
    List {
        #[arg(value_enum)]
        collection: Collection,
        /// 1-based page number
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
    },
    /// Create the data directory and both database schemas
    Init,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    FullTexts,
    Summaries,
}

impl Cli {
    /// Layer flag values over the loaded configuration.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref dir) = self.data_dir {
            settings.data_dir = dir.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.request_timeout = timeout;
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = Some(user_agent.clone());
        }
        if let Command::Serve { host, port } = &self.command {
            if let Some(host) = host {
                settings.host = host.clone();
            }
            if let Some(port) = port {
                settings.port = *port;
            }
        }
    }

    /// Execute the selected command.
    pub async fn run(self) -> anyhow::Result<()> {
        let mut settings = load_settings().await;
        self.apply_to_settings(&mut settings);

        match self.command {
            Command::Serve { .. } => server::serve(&settings).await,
            Command::Scrape { url } => {
                let state = AppState::new(&settings).await?;
                let outcome = state.scraper.scrape(&url).await?;
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                Ok(())
            }
            Command::List { collection, page } => {
                let archive = open_archive(&settings).await?;
                let request = PageRequest::new(page);
                let json = match collection {
                    Collection::FullTexts => {
                        serde_json::to_string_pretty(&archive.full_texts(request).await?)?
                    }
                    Collection::Summaries => {
                        serde_json::to_string_pretty(&archive.summaries(request).await?)?
                    }
                };
                println!("{json}");
                Ok(())
            }
            Command::Init => {
                open_archive(&settings).await?;
                info!(path = %settings.data_dir.display(), "initialized databases");
                Ok(())
            }
        }
    }
}

async fn open_archive(settings: &Settings) -> anyhow::Result<ArchiveService> {
    settings.ensure_directories()?;
    let documents = DieselDocumentRepository::open(&settings.full_text_database_path()).await?;
    let summaries = DieselSummaryRepository::open(&settings.summary_database_path()).await?;
    Ok(ArchiveService::new(Arc::new(documents), Arc::new(summaries)))
}
