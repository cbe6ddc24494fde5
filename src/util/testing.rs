//! Test support: one global tracing subscriber for unit and integration tests

use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    // RUST_LOG wins; otherwise everything bx emits
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bx=trace"));
    let module_filter = filter_fn(|metadata| metadata.target().starts_with("bx"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(fmt::TestWriter::new())
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
