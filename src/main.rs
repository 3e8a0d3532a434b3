//! # DevOS - Simulated Desktop
//!
//! Runs a desktop session: JSON-lines requests come from a script file or
//! stdin, and every request is answered with a desktop snapshot on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use devos::config::is_positive;
use devos::{Desktop, DesktopConfig, SessionServer};
use log::{error, info, warn};
use tokio::io::{AsyncBufRead, BufReader};

#[derive(Parser)]
#[command(name = "devos")]
#[command(about = "A simulated desktop driven by JSON-lines sessions")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "~/.config/devos/devos.toml")]
    config: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Read requests from this file instead of stdin
    #[arg(short, long)]
    script: Option<String>,

    /// Override the viewport size, e.g. 1280x800
    #[arg(long, value_parser = parse_viewport)]
    viewport: Option<(f64, f64)>,
}

fn parse_viewport(s: &str) -> Result<(f64, f64), String> {
    let (width, height) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {:?}", s))?;
    let width: f64 = width.trim().parse().map_err(|_| format!("bad width in {:?}", s))?;
    let height: f64 = height.trim().parse().map_err(|_| format!("bad height in {:?}", s))?;
    if !is_positive(width) || !is_positive(height) {
        return Err(format!("viewport must be positive, got {:?}", s));
    }
    Ok((width, height))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load before logging is up so general.debug can raise the level
    let loaded = DesktopConfig::load(&cli.config);
    let debug = cli.debug || matches!(&loaded, Ok(config) if config.general.debug);

    // Initialize logging
    if debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    info!("🚀 Starting DevOS desktop");
    info!("📄 Version: {}", devos::VERSION);

    let mut config = match loaded {
        Ok(config) => {
            info!("✅ Configuration loaded from: {}", cli.config);
            config
        }
        Err(e) => {
            error!("❌ Failed to load configuration: {:#}", e);
            info!("📝 Using default configuration");
            DesktopConfig::default()
        }
    };

    // Override config with CLI flags
    if let Some((width, height)) = cli.viewport {
        config.viewport.width = width;
        config.viewport.height = height;
        info!("🖥️ Viewport set to {}x{} via CLI flag", width, height);
    }

    let desktop = Desktop::new(&config).context("Failed to initialize desktop")?;
    let mut server = SessionServer::new(desktop.into_shared());

    let reader: Box<dyn AsyncBufRead + Unpin> = match &cli.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open script: {}", path))?;
            info!("📜 Running script: {}", path);
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    tokio::select! {
        result = server.run(reader, tokio::io::stdout()) => {
            result.context("Session failed")?;
        }
        _ = tokio::signal::ctrl_c() => {
            warn!("📨 Received Ctrl+C, shutting down");
        }
    }

    info!("🛑 DevOS session finished ({} requests)", server.processed());
    Ok(())
}
