use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_scoring_routes;
use applicant_scoring::config::AppConfig;
use applicant_scoring::error::AppError;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    let weights = config.scoring.weights;
    if !weights.is_normalized() {
        warn!(sum = weights.sum(), "default scoring weights do not sum to 1");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_scoring_routes(weights)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "applicant scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
