use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryReviewSource};
use crate::routes::with_review_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use confdesk::config::AppConfig;
use confdesk::error::AppError;
use confdesk::telemetry;
use confdesk::workflows::review::{ReviewCsvImporter, ReviewLedger, ReviewScoringService};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let ledger = match args.reviews_csv.take() {
        Some(path) => ReviewCsvImporter::from_path(path)?,
        None => ReviewLedger::new(),
    };

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let source = Arc::new(InMemoryReviewSource::new(ledger));
    let review_service = Arc::new(ReviewScoringService::new(source));

    let app = with_review_routes(review_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "program desk review service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
