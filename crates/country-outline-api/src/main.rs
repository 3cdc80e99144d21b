//! Country outline API server — entry point.

use clap::Parser;

use country_outline_api::config::resolve_listen_addr;

#[derive(Parser)]
#[command(
    name = "country-outline-api",
    about = "HTTP API serving Wikipedia country heading outlines as Markdown",
    version
)]
struct Cli {
    /// Listen address (host:port). Also reads from OUTLINE_ADDR env var.
    #[arg(long)]
    addr: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = resolve_listen_addr(cli.addr.as_deref());
    country_outline_api::serve(&addr).await
}
