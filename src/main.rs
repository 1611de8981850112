//! logscope main entrypoint.

use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    if let Err(e) = logscope::run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
