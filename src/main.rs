//! KeyRelay - best-effort text injection for Linux desktops
//!
//! Types or pastes text into whatever application has input focus, falling
//! back through configured backends and always staging to the clipboard.

use anyhow::Result;
use clap::Parser;
use keyrelay::config::Config;
use keyrelay::injection::Injector;
use tokio::io::AsyncReadExt;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to inject; read from stdin when omitted
    text: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Override the configured backend order (repeatable)
    #[arg(short, long)]
    backend: Vec<String>,

    /// Use an alternate config file
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if !args.backend.is_empty() {
        config.backends = args.backend.clone();
    }
    debug!("Backend order: {:?}", config.backends);

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    let injector = Injector::new(config);
    injector.inject(text.trim_end_matches('\n')).await?;

    Ok(())
}
