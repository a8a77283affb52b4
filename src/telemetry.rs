use anyhow::{Context, Result};
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, Resource};
use std::collections::HashMap;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Telemetry configuration, sourced from OTEL_* environment variables.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub service_version: String,
    pub environment: String,
    pub otlp_endpoint: Option<String>,
    pub enable_tracing: bool,
    pub export_timeout: Duration,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: env!("CARGO_PKG_NAME").to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: std::env::var("DEPLOYMENT_ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            otlp_endpoint: std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok(),
            enable_tracing: std::env::var("OTEL_TRACES_ENABLED")
                .map(|v| v.parse().unwrap_or(true))
                .unwrap_or(true),
            export_timeout: Duration::from_secs(30),
        }
    }
}

/// Handles kept alive until shutdown so exporters can flush.
pub struct TelemetryHandles {
    _config: TelemetryConfig,
}

impl TelemetryHandles {
    pub async fn shutdown(self) -> Result<()> {
        info!("Shutting down telemetry providers...");
        global::shutdown_tracer_provider();
        Ok(())
    }
}

/// Initialize tracing and the optional OTLP exporter.
pub async fn init_telemetry(config: Option<TelemetryConfig>) -> Result<TelemetryHandles> {
    let config = config.unwrap_or_default();

    info!(
        "Initializing telemetry for service: {} v{} in environment: {}",
        config.service_name, config.service_version, config.environment
    );

    let resource = Resource::new(vec![
        KeyValue::new("service.name", config.service_name.clone()),
        KeyValue::new("service.version", config.service_version.clone()),
        KeyValue::new("deployment.environment", config.environment.clone()),
    ]);

    if config.enable_tracing {
        init_tracing(&config, &resource)?;
    }

    setup_tracing_subscriber()?;

    Ok(TelemetryHandles { _config: config })
}

fn init_tracing(config: &TelemetryConfig, resource: &Resource) -> Result<()> {
    if let Some(endpoint) = &config.otlp_endpoint {
        opentelemetry_otlp::new_pipeline()
            .tracing()
            .with_exporter(
                opentelemetry_otlp::new_exporter()
                    .tonic()
                    .with_endpoint(endpoint)
                    .with_timeout(config.export_timeout),
            )
            .with_trace_config(
                opentelemetry_sdk::trace::config()
                    .with_resource(resource.clone())
                    .with_sampler(opentelemetry_sdk::trace::Sampler::AlwaysOn),
            )
            .install_batch(runtime::Tokio)
            .context("Failed to initialize OTLP tracer")?;

        info!("Distributed tracing initialized with OTLP exporter");
    } else {
        info!("No OTLP endpoint configured, using console-only tracing");
    }

    Ok(())
}

fn setup_tracing_subscriber() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into());

    Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}

/// Get a meter for recording request metrics.
pub fn get_meter(name: &str) -> Meter {
    Meter {
        name: name.to_string(),
    }
}

/// Lightweight meter facade: instruments are recorded onto the tracing
/// output until a metrics exporter is wired up.
#[derive(Debug)]
pub struct Meter {
    #[allow(unused)]
    name: String,
}

impl Meter {
    pub fn u64_counter(&self, name: &str) -> InstrumentBuilder<Counter> {
        InstrumentBuilder {
            instrument: Counter {
                name: name.to_string(),
            },
        }
    }

    pub fn f64_histogram(&self, name: &str) -> InstrumentBuilder<Histogram> {
        InstrumentBuilder {
            instrument: Histogram {
                name: name.to_string(),
            },
        }
    }
}

#[derive(Debug)]
pub struct InstrumentBuilder<T> {
    instrument: T,
}

impl<T> InstrumentBuilder<T> {
    pub fn with_description(self, _description: &str) -> Self {
        self
    }

    pub fn build(self) -> T {
        self.instrument
    }
}

#[derive(Debug)]
pub struct Counter {
    name: String,
}

impl Counter {
    pub fn add(&self, value: u64, _attributes: &[KeyValue]) {
        tracing::debug!(counter = %self.name, value, "Counter incremented");
    }
}

#[derive(Debug)]
pub struct Histogram {
    name: String,
}

impl Histogram {
    pub fn record(&self, value: f64, _attributes: &[KeyValue]) {
        tracing::debug!(histogram = %self.name, value, "Histogram recorded");
    }
}

/// Health check for telemetry components.
pub fn telemetry_health_check() -> HashMap<String, bool> {
    let mut health = HashMap::new();
    health.insert("tracer_provider".to_string(), true);
    health.insert("meter_provider".to_string(), true);
    health
}
