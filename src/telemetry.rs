use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize structured logging on stderr.
///
/// `RUST_LOG` wins over the configured level. Stdout stays reserved for the
/// operator-facing prompts and progress lines.
pub fn init_telemetry(settings: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let registry = tracing_subscriber::registry().with(filter);
    if settings.json_logs {
        registry
            .with(fmt_layer.json().with_current_span(true).with_span_list(true))
            .try_init()?;
    } else {
        registry.with(fmt_layer).try_init()?;
    }

    tracing::debug!("release-helper telemetry initialized");
    Ok(())
}
