use std::net::{IpAddr, SocketAddr};

use bizspec_llm::config::DEFAULT_BASE_URL;
use bizspec_llm::LlmConfig;
use clap::Args;

/// Origins of the development frontends allowed by default.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:3000",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:3000",
];

#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "BIZSPEC_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "BIZSPEC_PORT", default_value = "8000")]
    pub port: u16,

    /// Anthropic API key. Translation is unavailable without it.
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the Anthropic API
    #[arg(long, env = "ANTHROPIC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub anthropic_base_url: String,

    /// Allowed CORS origin (repeatable, or comma-separated in the env var)
    #[arg(
        long = "cors-origin",
        env = "BIZSPEC_CORS_ORIGINS",
        value_delimiter = ',',
        default_values_t = DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect::<Vec<_>>()
    )]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig::new(self.api_key.clone()).with_base_url(&self.anthropic_base_url)
    }
}
