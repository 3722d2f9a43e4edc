use clap::Parser;
use exam_review::{server, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    if let Err(e) = server::run(config).await {
        tracing::error!("Error running server: {e}");
        std::process::exit(1);
    }
}
