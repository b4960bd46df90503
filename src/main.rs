use dotenvy::dotenv;
use personal_finances::config::{database, settings};
use personal_finances::errors::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load settings and work out where the database lives
    let app_settings = settings::load_settings_or_default(settings::DEFAULT_SETTINGS_PATH)
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;
    let database_url = app_settings.resolve_database_url();

    // 4. Connect and make sure the schema exists
    let db = database::create_connection(&database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database ready."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    Ok(())
}
