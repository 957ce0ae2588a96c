use cart_manager::demo;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics are opt-in via RUST_LOG; the demo summaries themselves go
    // to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    demo::process_orders();
}
