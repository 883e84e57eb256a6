use crate::cli::ServeArgs;
use crate::infra::{build_catalog, AppState};
use crate::routes::router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use insignia::ai::GeminiClient;
use insignia::config::AppConfig;
use insignia::error::AppError;
use insignia::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(seed) = args.seed.take() {
        config.generation.seed = Some(seed);
    }

    telemetry::init(config.environment, &config.telemetry)?;

    let catalog = build_catalog(&config.generation).map_err(|err| {
        error!(error = %err, "dataset generation failed; aborting startup");
        err
    })?;

    let ai = GeminiClient::new(&config.ai);
    if !ai.is_configured() {
        warn!("API_KEY for Gemini is not set; generative endpoints will return 503");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        catalog: Arc::new(catalog),
        ai: Arc::new(ai),
    };

    let app = router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, model = %config.ai.model, "insignia dashboard api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
