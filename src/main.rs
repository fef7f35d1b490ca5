//! gofreta-seed - seed a Gofreta MongoDB instance with its default records

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gofreta_seed::{
    config::Args,
    db::MongoClient,
    seed::{self, MongoSeedStore, SeedDefaults},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("gofreta_seed={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("======================================");
    info!("  gofreta-seed - Gofreta CMS seeding");
    info!("======================================");
    info!(
        "Build: {} ({})",
        option_env!("GIT_COMMIT_SHORT").unwrap_or("unknown"),
        option_env!("BUILD_TIMESTAMP").unwrap_or("unknown")
    );
    info!("MongoDB: {}", args.mongodb_uri);
    info!("Database: {}", args.mongodb_db);
    info!("Admin username: {}", args.admin_username);
    info!(
        "Admin password: {}",
        if args.admin_password.is_some() { "from environment" } else { "stock default" }
    );
    info!("Language: {} ({})", args.language_title, args.language_locale);
    info!("======================================");

    // Resolve seed values (hashes the password override if supplied)
    let defaults = match SeedDefaults::from_args(&args) {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to prepare seed data: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to MongoDB; an unreachable database is fatal
    let mongo = match MongoClient::new(&args.mongodb_uri, &args.mongodb_db).await {
        Ok(client) => client,
        Err(e) => {
            error!("MongoDB connection failed: {}", e);
            std::process::exit(1);
        }
    };

    let store = match MongoSeedStore::new(&mongo).await {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to open seed collections: {}", e);
            std::process::exit(1);
        }
    };

    match seed::run(&store, &defaults).await {
        Ok(report) => {
            info!(
                admin_created = report.admin_created,
                language_created = report.language_created,
                "Seeding completed"
            );
        }
        Err(e) => {
            error!("Seeding failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
