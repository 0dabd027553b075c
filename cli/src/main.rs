//! reqinstall - install requirements.txt with GitHub credentials from the environment

use clap::Parser;
use tracing_subscriber::EnvFilter;

use reqinstall_cli::cli::Cli;
use reqinstall_cli::output::OutputContext;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let no_color = cli.no_color;
    if let Err(e) = cli.run().await {
        OutputContext::new(no_color, false).error(&format!("Error: {e:#}"));
        std::process::exit(1);
    }
}
