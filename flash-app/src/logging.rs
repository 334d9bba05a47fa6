use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FLASH_LOG";

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Logs go to stderr so listings on stdout stay clean. `FLASH_LOG` takes a
/// full filter directive and beats `-v`.
pub fn init_logging(verbosity: u8) {
    let fallback = default_directive(verbosity);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .or_else(|_| EnvFilter::try_new(fallback))
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
