//! YallaNow client
//!
//! Command-line entry point: prints the homepage feed for a user

use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};

use yallanow_client::{
    config::Settings,
    services::{ServiceFactory, StaticTokenProvider},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    let user_id = std::env::args()
        .nth(1)
        .context("usage: yallanow <user-id> [count]")?;
    let count = match std::env::args().nth(2) {
        Some(count) => count.parse().context("count must be a positive integer")?,
        None => settings.feed.default_count,
    };

    info!("Starting {}", yallanow_client::info());

    let tokens = Arc::new(StaticTokenProvider::new(settings.auth.id_token.clone()));
    let services = ServiceFactory::new(&settings, tokens)?;

    let page = match services.feed_service.get_homepage_events(&user_id, count).await {
        Ok(page) => page,
        Err(e) => {
            error!(user_id = %user_id, kind = ?e.kind(), error = %e, "Failed to load homepage feed");
            return Err(e.into());
        }
    };

    println!("recommId: {}", page.recomm_id);
    for (rank, event) in page.recommendations.iter().enumerate() {
        println!(
            "{:>3}. [{}] {} ({} - {})",
            rank + 1,
            event.event_id,
            event.title().unwrap_or("untitled"),
            event.event_start_time.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"),
            event.event_end_time.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"),
        );
    }

    Ok(())
}
