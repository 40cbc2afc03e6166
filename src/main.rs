use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hivebox_service::aggregator::Aggregator;
use hivebox_service::config::Config;
use hivebox_service::http::{AppState, router};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hivebox_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load();
    tracing::info!(
        boxes = config.box_ids.len(),
        phenomenon = %config.phenomenon,
        freshness_window_secs = config.freshness_window_secs,
        "Configuration resolved"
    );

    let addr = SocketAddr::new(config.host.parse().expect("Invalid HOST"), config.port);

    let aggregator = Aggregator::new(config).expect("Failed to build HTTP client");

    let app = router(AppState {
        aggregator: Arc::new(aggregator),
    })
    .layer(TraceLayer::new_for_http());

    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
