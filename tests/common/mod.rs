use tracing_subscriber::{EnvFilter, fmt};

/// Routes `tracing` output through the test harness so it shows up with
/// `--nocapture`. `RUST_LOG` overrides the default `debug` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}
