use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, InMemorySessionRepository, LoggingSubmissionSink};
use crate::routes::with_diagnosis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use caddie_ai::config::AppConfig;
use caddie_ai::error::AppError;
use caddie_ai::telemetry;
use caddie_ai::workflows::diagnosis::DiagnosisService;
use caddie_ai::workflows::recommendation::MatchingEngine;
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
    if let Some(path) = args.catalog_csv.take() {
        config.catalog.csv_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemorySessionRepository::default());
    let sink = Arc::new(LoggingSubmissionSink);
    let catalog = Arc::new(load_catalog(config.catalog.csv_path.as_deref())?);
    let diagnosis_service = Arc::new(DiagnosisService::new(
        repository,
        sink,
        MatchingEngine::default(),
        catalog,
    ));

    let app = with_diagnosis_routes(diagnosis_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "fitting diagnosis service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
