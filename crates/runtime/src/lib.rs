//! Process bootstrap: tracing setup and service metrics.

use tracing::Level;

pub mod metrics;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_max_level(Level::INFO)
        .try_init();
}
