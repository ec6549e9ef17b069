use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "FLUOR_LOG";

#[tokio::main]
async fn main() {
    // stdout carries function responses, diagnostics go to stderr
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "fluor starting");
    command::exec().await;
}
