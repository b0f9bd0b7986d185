use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use stylist_api::{AppState, RestApi};
use stylist_core::{AttributeVocabulary, Catalog, Stylist, StylistConfig, DEFAULT_EMBEDDING_DIM, DEFAULT_OUTFIT_COUNT};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Outfit suggestions from a submitted wardrobe
#[derive(Parser, Debug)]
#[command(name = "stylist")]
#[command(about = "Suggests outfits by attribute similarity", long_about = None)]
struct Args {
    /// HTTP API port
    #[arg(long, default_value_t = 8000)]
    http_port: u16,

    /// Path to the reference catalog (JSON array of items)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Path to a vocabulary file; the built-in vocabulary is used when absent
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Number of outfits returned per request
    #[arg(long, default_value_t = DEFAULT_OUTFIT_COUNT)]
    outfit_count: usize,

    /// Width client and catalog embeddings are fixed to
    #[arg(long, default_value_t = DEFAULT_EMBEDDING_DIM)]
    embedding_dim: usize,

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

    info!("Starting Stylist v{}", env!("CARGO_PKG_VERSION"));

    let vocabulary = match &args.vocabulary {
        Some(path) => {
            info!("Vocabulary file: {:?}", path);
            AttributeVocabulary::load(path)?
        }
        None => AttributeVocabulary::builtin().clone(),
    };
    info!(
        "Vocabulary v{} loaded, vector dimension {}",
        vocabulary.version,
        vocabulary.dim()
    );
    let vocabulary = Arc::new(vocabulary);

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path, args.embedding_dim)?,
        None => {
            info!("No catalog file given, starting with an empty catalog");
            Catalog::empty(args.embedding_dim)
        }
    };

    let config = StylistConfig {
        outfit_count: args.outfit_count,
        embedding_dim: args.embedding_dim,
    };
    info!("Outfits per request: {}", config.outfit_count);

    let state = Arc::new(AppState {
        stylist: Stylist::new(vocabulary.clone(), config),
        catalog: Arc::new(catalog),
        vocabulary,
    });

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(state, http_port).await {
                error!("HTTP server error: {}", e);
            }
        })
    });

    info!("Stylist started successfully");
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
