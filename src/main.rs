//! Rustle Dialogs - modal dialog coordination for the Rustle player
//! Console front end driving dialogs, track actions and sharing

mod api;
mod app;
mod dialog;
mod features;
mod ui;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so prompts on stdout stay readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = features::Settings::load();
    app::App::new(settings)?.run().await
}
