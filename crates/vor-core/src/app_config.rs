use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// YAML catalog that replaces the built-in seed products when set.
    pub catalog_path: Option<PathBuf>,
    /// YAML lexicon that replaces the built-in keyword sets when set.
    pub lexicon_path: Option<PathBuf>,
    pub search_default_limit: usize,
    pub reddit_base_url: String,
    pub reddit_user_agent: String,
    pub reddit_request_timeout_secs: u64,
}
