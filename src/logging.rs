use crate::platform::PlatformDescriptor;
use crate::resolver::Resolution;
use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging based on verbosity level
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("ark_helper=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ark_helper=warn"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log a completed platform resolution
pub fn log_resolution(resolution: &Resolution) {
    tracing::debug!(
        platform = %resolution.platform,
        family = resolution.platform.family().as_str(),
        packages = resolution.packages.len(),
        tar = resolution.attributes.tar.as_str(),
        "Platform resolved"
    );
}

/// Log an attribute replaced by an override
pub fn log_override_applied(attribute: &str, value: &str) {
    tracing::info!(attribute = attribute, value = value, "Attribute overridden");
}

/// Log host platform detection
pub fn log_detection(os: &str, descriptor: &PlatformDescriptor) {
    tracing::debug!(
        os = os,
        arch = std::env::consts::ARCH,
        platform = %descriptor,
        "Host platform detected"
    );
}
