use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Target of the line announcing the bound listener.
pub const STARTUP_TARGET: &str = "api::startup";

/// Filter used by the binary: `RUST_LOG` when set, `info` otherwise.
pub fn env_filter() -> anyhow::Result<EnvFilter> {
    with_startup_line(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
}

/// Keeps the startup line enabled whatever verbosity `base` asks for.
pub fn with_startup_line(base: EnvFilter) -> anyhow::Result<EnvFilter> {
    let directive: Directive = format!("{STARTUP_TARGET}=info").parse()?;

    Ok(base.add_directive(directive))
}
