//! ayu-xcode binary entrypoint kept minimal. The pipeline lives in `app`.

mod app;
mod args;
mod collect;
mod color;
mod convert;
mod palette;
mod template;

use clap::Parser;

fn main() {
    let parsed = args::Args::parse();

    let level = args::determine_log_level(&parsed);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = app::run(&parsed) {
        tracing::error!(error = %err, "theme generation failed");
        std::process::exit(1);
    }
}
