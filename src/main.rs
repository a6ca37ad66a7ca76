//! Single-chunk voxel walker
//!
//! Main entry point that delegates to the app module.

mod app;

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting blockwalk...");
    app::run_game()
}
