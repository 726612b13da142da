//! Log subscriber and optional OpenTelemetry span export.
//!
//! Logs go to stderr so that stdout carries only the rendered result.

use anyhow::Context;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, TelemetrySettings};

const SERVICE_NAME: &str = "creator-partner";

/// Flushes exported spans when dropped or shut down.
#[must_use = "dropping the guard immediately stops span export"]
pub struct TelemetryGuard {
    provider: Option<TracerProvider>,
}

impl TelemetryGuard {
    /// Flushes pending spans and stops export.
    pub fn shutdown(mut self) {
        self.flush();
    }

    fn flush(&mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(e) = provider.shutdown() {
                eprintln!("failed to flush exported spans: {e}");
            }
        }
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        self.flush();
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides `settings.filter` when set. Must be called from
/// inside a Tokio runtime when an OTLP endpoint is configured.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<TelemetryGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .with_context(|| format!("invalid log filter `{}`", settings.filter))?;

    let provider = settings
        .otlp_endpoint
        .as_deref()
        .map(otlp_provider)
        .transpose()?;

    let otel_layer = provider
        .as_ref()
        .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer(SERVICE_NAME)));

    let (json_layer, pretty_layer) = match settings.format {
        LogFormat::Json => (
            Some(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            ),
            None,
        ),
        LogFormat::Pretty => (None, Some(fmt::layer().with_writer(std::io::stderr))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .with(json_layer)
        .with(pretty_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(TelemetryGuard { provider })
}

fn otlp_provider(endpoint: &str) -> anyhow::Result<TracerProvider> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .with_context(|| format!("failed to build OTLP exporter for {endpoint}"))?;

    Ok(TracerProvider::builder()
        .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
        .build())
}
