use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vakfinder_api::RestApi;
use vakfinder_core::MatchingConfig;
use vakfinder_matching::MatchingService;
use vakfinder_storage::{Dataset, MemoryCompanyStore, MemoryReviewStore};

/// Company matching and ranking engine for a service marketplace
#[derive(Parser, Debug)]
#[command(name = "vakfinder")]
#[command(about = "Match customer requests to service companies", long_about = None)]
struct Args {
    /// JSON dataset with companies and reviews
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Raw candidates fetched per phase before ranking
    #[arg(long, default_value_t = vakfinder_core::config::DEFAULT_CANDIDATE_LIMIT)]
    candidate_limit: usize,

    /// Companies returned by a similarity lookup
    #[arg(long, default_value_t = vakfinder_core::config::DEFAULT_SIMILAR_LIMIT)]
    similar_limit: usize,

    /// Timeout for a single store call, in milliseconds
    #[arg(long, default_value_t = 5000)]
    store_timeout_ms: u64,

    /// Log level, overridden by RUST_LOG when set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_stores(data_file: Option<&PathBuf>) -> anyhow::Result<(MemoryCompanyStore, MemoryReviewStore)> {
    let dataset = match data_file {
        Some(path) => Dataset::load(path)?,
        None => {
            warn!("No --data-file given, starting with an empty company store");
            Dataset::default()
        }
    };
    Ok(dataset.into_stores()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting vakfinder v{}", env!("CARGO_PKG_VERSION"));

    let config = MatchingConfig {
        candidate_limit: args.candidate_limit,
        similar_limit: args.similar_limit,
        store_timeout: Duration::from_millis(args.store_timeout_ms),
    };

    let (companies, reviews) = load_stores(args.data_file.as_ref())?;
    info!(
        companies = companies.count(),
        reviews = reviews.count(),
        "Stores initialized"
    );

    let service = Arc::new(
        MatchingService::new(Arc::new(companies), config)?.with_reviews(Arc::new(reviews)),
    );

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(service, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", http_port);

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
