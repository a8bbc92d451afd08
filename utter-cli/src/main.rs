use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod tui;

use crate::tui::TuiApp;

#[derive(Parser, Debug)]
#[command(name = "utter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal text-to-speech workbench")]
struct Args {
    /// Load settings from a specific file instead of ~/.utter/settings.toml
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Start with this voice selected (short name, e.g. en-US-AriaNeural)
    #[arg(long, value_name = "NAME")]
    voice: Option<String>,

    /// Override the voice-list locale filter from settings
    #[arg(long, value_name = "LOCALE")]
    locale: Option<String>,
}

fn main() -> Result<()> {
    setup_tracing()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let local = tokio::task::LocalSet::new();
        local.run_until(async_main()).await
    })
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    info!(
        "startup: settings={:?}, voice={:?}, locale={:?}",
        args.settings, args.voice, args.locale
    );

    let mut app = TuiApp::new(args.settings, args.voice, args.locale).await?;
    app.run().await?;

    Ok(())
}

fn setup_tracing() -> Result<()> {
    use std::fs;
    use tracing_subscriber::fmt;

    // Log to a file; stderr would corrupt the TUI
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    let trace_dir = PathBuf::from(home).join(".utter").join("trace");
    fs::create_dir_all(&trace_dir)?;

    let log_file = trace_dir.join("utter.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true),
        )
        .with(EnvFilter::new("info"))
        .init();

    info!("Tracing initialized to {:?}", log_file);
    Ok(())
}
