//! hotelres: hotel reservation desk.
//!
//! Text menu for listing rooms, booking, cancelling and searching
//! reservations, and printing the monthly revenue report.

mod app;
mod menu;
mod prompt;
mod render;

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hotelres_db::connect_with;
use hotelres_shared::AppConfig;

use crate::app::App;
use crate::prompt::Prompt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with tables on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotelres=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!(
        max_connections = config.database.max_connections,
        "Connected to database"
    );

    let app = App::new(db, &config);
    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout().lock());
    app.run(&mut prompt).await?;

    Ok(())
}
