use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use camsim_api::{AppState, RestApi};
use camsim_catalog::{CatalogSource, Snapshot, DEFAULT_CATALOG_URL};
use camsim_core::BoundsTable;
use camsim_similarity::SimilarityEngine;

/// Compare camera settings against the pro player catalog
#[derive(Parser, Debug)]
#[command(name = "camsim")]
#[command(about = "Find pro players with similar camera settings", long_about = None)]
struct Args {
    /// HTTP API port
    #[arg(long, default_value_t = 4321)]
    http_port: u16,

    /// Bounds table JSON (defaults to the bundled table)
    #[arg(long)]
    bounds: Option<PathBuf>,

    /// Catalog snapshot JSON (defaults to the bundled snapshot)
    #[arg(long, conflicts_with = "remote_catalog")]
    catalog: Option<PathBuf>,

    /// Fetch the catalog from the remote page on every request
    #[arg(long)]
    remote_catalog: bool,

    /// Remote catalog endpoint
    #[arg(long, default_value = DEFAULT_CATALOG_URL)]
    catalog_url: String,

    /// Timeout for remote catalog fetches, in seconds
    #[arg(long, default_value_t = 10)]
    fetch_timeout_secs: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting camsim v{}", env!("CARGO_PKG_VERSION"));

    let bounds = match &args.bounds {
        Some(path) => {
            info!("Bounds table: {:?}", path);
            BoundsTable::load_from_path(path)?
        }
        None => {
            info!("Bounds table: bundled");
            BoundsTable::bundled()?
        }
    };
    let engine = SimilarityEngine::new(Arc::new(bounds));

    let catalog = if args.remote_catalog {
        info!("Catalog: {} (fetched per request)", args.catalog_url);
        CatalogSource::remote(&args.catalog_url, Duration::from_secs(args.fetch_timeout_secs))?
    } else {
        let snapshot = match &args.catalog {
            Some(path) => {
                info!("Catalog: snapshot {:?}", path);
                Snapshot::load_from_path(path)?
            }
            None => {
                info!("Catalog: bundled snapshot");
                Snapshot::bundled()?
            }
        };
        CatalogSource::snapshot(snapshot)
    };

    let state = Arc::new(AppState::new(engine, catalog));

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(state, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/api/similar-camera-settings", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
