use anyhow::Result;
use bizspec_server::config::ServerConfig;
use bizspec_service::{TranslateError, Translator};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "bizspec-server", version, about = "BizSpec Translator API")]
struct Cli {
    #[command(flatten)]
    config: ServerConfig,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate one business requirement and print the four sections
    Translate {
        /// The business requirement text
        requirement: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    match cli.command {
        Some(Commands::Translate { requirement }) => {
            let out = bizspec_server::cli::run_translate(&config.llm_config(), &requirement).await?;
            print!("{out}");
        }
        None => {
            // Default: start server
            let translator = match Translator::new(&config.llm_config()) {
                Ok(t) => {
                    info!(
                        "completion backend: {} ({})",
                        t.backend_name(),
                        t.model().unwrap_or("-")
                    );
                    Some(t)
                }
                Err(TranslateError::Configuration(msg)) => {
                    warn!("{msg}; /api/translate will report a configuration error");
                    warn!("set ANTHROPIC_API_KEY in the environment or a .env file");
                    None
                }
                Err(e) => return Err(e.into()),
            };

            let app = bizspec_server::build_app(translator, &config.cors_origins)?;

            let addr = config.addr();
            let listener = TcpListener::bind(addr).await?;
            info!("bizspec-server listening on http://{addr}");

            bizspec_server::serve(listener, app).await?;
            info!("bizspec-server stopped");
        }
    }

    Ok(())
}
