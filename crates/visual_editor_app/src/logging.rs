use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::settings::AppSettings;

/// Initialize the tracing subscriber. `RUST_LOG` overrides the configured level.
pub fn init(settings: &AppSettings) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Visual editor starting"
    );

    Ok(())
}

/// Log the effective settings.
pub fn log_settings(settings: &AppSettings) {
    tracing::info!(
        window_width = settings.window.width,
        window_height = settings.window.height,
        canvas_width = settings.canvas.width,
        canvas_height = settings.canvas.height,
        initial_model = ?settings.initial_model,
        "Settings loaded"
    );
}
