use clap::Parser;
use dotenvy::dotenv;
use monk_reflections_api::config::AppConfig;
use monk_reflections_api::infrastructure::database;
use monk_reflections_api::services::api_keys::create_api_key;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Creates an API key for the admin dashboard. The raw key is printed once;
/// only its SHA-256 is stored.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Label stored alongside the key
    #[arg(short, long, default_value = "Admin Dashboard Key")]
    name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "generate_api_key=info,monk_reflections_api=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🔑 Generating API key...");

    let config = AppConfig::from_env();
    let db = database::setup_database(&config).await?;

    let (api_key, raw_key) = create_api_key(&db, Some(args.name)).await?;

    info!("✅ API key #{} created", api_key.id);
    println!();
    println!("API key: {}", raw_key);
    println!();
    println!("Store it now, it cannot be shown again.");
    println!("Send it as: Authorization: Bearer {}", raw_key);

    Ok(())
}
