use clap::Parser;
use common::config::Config;
use detection::model::GenericError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "target/debug/config/total_config.yaml")]
    pub config: String,
}

pub fn initialize_executable() -> Result<Config, GenericError> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    tracing::debug!("Loading config from: {}", args.config);
    let config = Config::load(&args.config)?;

    Ok(config)
}

/// Initialize the global tracing subscriber. `RUST_LOG` wins over the
/// configured level when set.
pub fn initialize_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}
