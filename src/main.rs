use event_carousel::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting event carousel");

    // Load configuration
    let config = startup::load_config().await?;

    // Fetch events and page through them on the terminal
    startup::start_carousel(config).await
}
