use anyhow::Context;
use placement_assistant::api::HttpBackend;
use placement_assistant::config::{Config, load_dotenv};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    load_dotenv();
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let backend = HttpBackend::new(&config).context("Failed to build HTTP client")?;
    tracing::info!(endpoint = backend.chat_url(), "starting placement assistant");

    dioxus::LaunchBuilder::new()
        .with_context(backend)
        .launch(placement_assistant::ui::App);
    Ok(())
}
