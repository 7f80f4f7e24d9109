use clap::Parser;
use storycast::cli::Cli;
use storycast::commands;
use storycast::core::context::AppCtx;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = run().await {
        eprintln!("• {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let ctx = AppCtx::init(cli.config.as_deref())?;
    commands::dispatch(cli.command, &ctx).await
}
