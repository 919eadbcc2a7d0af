use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INSTALL: OnceCell<()> = OnceCell::new();

/// Installs the process-wide tracing subscriber, honoring `RUST_LOG`.
/// Safe to call more than once; only the first installation wins.
pub fn init() {
    INSTALL.get_or_init(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(true)
            .init();
    });
}
