//! Configuration management for blog-summarizer using the prefer crate.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base data directory.
    pub data_dir: PathBuf,
    /// Filename of the full-content database.
    pub full_text_database: String,
    /// Filename of the summary database.
    pub summary_database: String,
    /// User agent configuration for page fetches.
    /// None = default browser identity, "impersonate" = rotating browser identity.
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// Address the web server binds to.
    pub host: String,
    /// Port the web server listens on.
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        // Default to ~/Documents/blog-summarizer/ for user data
        let data_dir = dirs::document_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("blog-summarizer");

        Self {
            data_dir,
            full_text_database: "full_texts.db".to_string(),
            summary_database: "summaries.db".to_string(),
            user_agent: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Settings {
    /// Create settings with a custom data directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Default::default()
        }
    }

    /// Full path to the full-content database.
    pub fn full_text_database_path(&self) -> PathBuf {
        self.data_dir.join(&self.full_text_database)
    }

    /// Full path to the summary database.
    pub fn summary_database_path(&self) -> PathBuf {
        self.data_dir.join(&self.summary_database)
    }

    /// Ensure all directories exist.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.data_dir)
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Target directory for data.
    #[serde(default)]
    pub target: Option<String>,
    /// Full-content database filename.
    #[serde(default)]
    pub full_text_database: Option<String>,
    /// Summary database filename.
    #[serde(default)]
    pub summary_database: Option<String>,
    /// User agent string, or "impersonate".
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub request_timeout: Option<u64>,
    /// Web server bind address.
    #[serde(default)]
    pub host: Option<String>,
    /// Web server port.
    #[serde(default)]
    pub port: Option<u16>,
}

impl Config {
    /// Load configuration using prefer crate.
    /// Discovers blog-summarizer config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("blog-summarizer").await {
            Ok(pref_config) => {
                let target: Option<String> = pref_config.get("target").ok();
                let full_text_database: Option<String> =
                    pref_config.get("full_text_database").ok();
                let summary_database: Option<String> =
                    pref_config.get("summary_database").ok();
                let user_agent: Option<String> = pref_config.get("user_agent").ok();
                let request_timeout: Option<u64> = pref_config.get("request_timeout").ok();
                let host: Option<String> = pref_config.get("host").ok();
                let port: Option<u16> = pref_config.get("port").ok();

                Config {
                    target,
                    full_text_database,
                    summary_database,
                    user_agent,
                    request_timeout,
                    host,
                    port,
                }
            }
            // No config file found
            Err(_) => Self::default(),
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref target) = self.target {
            let path = shellexpand::tilde(target);
            settings.data_dir = PathBuf::from(path.as_ref());
        }
        if let Some(ref database) = self.full_text_database {
            settings.full_text_database = database.clone();
        }
        if let Some(ref database) = self.summary_database {
            settings.summary_database = database.clone();
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = Some(user_agent.clone());
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(ref host) = self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
    }
}

/// Load settings from configuration.
pub async fn load_settings() -> Settings {
    let config = Config::load().await;
    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);
    settings
}
