use prometheus::{
    Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the process-wide `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE
        .get_or_init(|| async {
            info!("Initializing Metrics ...");
            Metrics::new()
        })
        .await
}

/// Metrics if already initialized; for synchronous call sites.
pub fn try_get_metrics() -> Option<&'static Arc<Metrics>> {
    METRICS_INSTANCE.get()
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Token metrics
    pub token_exchanges: IntCounter,
    pub token_exchange_failures: IntCounterVec,
    pub token_exchange_duration: Histogram,
    pub token_cache_hits: IntCounter,
    pub token_expiry_unix: IntGauge,

    // Remote API metrics
    pub remote_requests: IntCounterVec,
    pub remote_request_duration: HistogramVec,

    // Boundary
    pub boundary_errors: IntCounterVec,

    // Config/runtime
    pub config_validation_errors: IntCounter,
    pub up: IntGauge,
}

impl Metrics {
    fn new() -> Arc<Self> {
        // the namespace and every metric below are static and valid
        let registry = Registry::new_custom(Some("cmsbridge".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            // Token
            token_exchanges: IntCounter::new("token_exchanges_total", "Client-credentials token exchanges started").unwrap(),
            token_exchange_failures: IntCounterVec::new(Opts::new("token_exchange_failures_total", "Failed token exchanges by reason"), &["reason"]).unwrap(),
            token_exchange_duration: Histogram::with_opts(HistogramOpts::new("token_exchange_duration_seconds", "Token exchange duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0])).unwrap(),
            token_cache_hits: IntCounter::new("token_cache_hits_total", "Tokens served from cache").unwrap(),
            token_expiry_unix: IntGauge::new("token_expiry_unix_seconds", "Current token expiry timestamp").unwrap(),

            // Remote
            remote_requests: IntCounterVec::new(Opts::new("remote_requests_total", "Remote API calls by operation and status"), &["operation", "status"]).unwrap(),
            remote_request_duration: HistogramVec::new(HistogramOpts::new("remote_request_duration_seconds", "Remote API call duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]), &["operation"]).unwrap(),

            boundary_errors: IntCounterVec::new(Opts::new("boundary_errors_total", "Errors translated at the HTTP boundary"), &["kind"]).unwrap(),

            // Config/runtime
            config_validation_errors: IntCounter::new("config_validation_errors_total", "Validation errors during startup").unwrap(),
            up: IntGauge::new("up", "1 if service is healthy").unwrap(),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.token_exchanges.clone())).unwrap();
        reg.register(Box::new(metrics.token_exchange_failures.clone())).unwrap();
        reg.register(Box::new(metrics.token_exchange_duration.clone())).unwrap();
        reg.register(Box::new(metrics.token_cache_hits.clone())).unwrap();
        reg.register(Box::new(metrics.token_expiry_unix.clone())).unwrap();
        reg.register(Box::new(metrics.remote_requests.clone())).unwrap();
        reg.register(Box::new(metrics.remote_request_duration.clone())).unwrap();
        reg.register(Box::new(metrics.boundary_errors.clone())).unwrap();
        reg.register(Box::new(metrics.config_validation_errors.clone())).unwrap();
        reg.register(Box::new(metrics.up.clone())).unwrap();

        metrics
    }
}
