use clap::Parser;
use statblock::cli::{failure_report, run, Cli};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the stat block.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!(?cli, "CLI arguments parsed, invoking run");

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "CLI exited with error");
        let (message, code) = failure_report(&e);
        eprintln!("{message}");
        std::process::exit(code);
    }
}
