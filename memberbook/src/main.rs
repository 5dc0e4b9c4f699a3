use memberbook::{db, view, Config};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memberbook=info".into()),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("starting memberbook (db: {})", config.database.database_url);

    // Make sure the member table exists before the menu starts.
    let mut conn = db::connection::acquire(&config.database).await?;
    let schema = db::schema::ensure_schema(&mut conn).await;
    db::connection::release(conn).await;
    schema?;

    view::console::run(&config).await?;
    Ok(())
}
