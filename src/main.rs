use library_catalog::{
    adapters::{
        memory::InMemoryBookRepository,
        mock::{MemberValidator as MockMemberValidator, Notifier as MockNotifier},
        postgres::PostgresBookRepository,
    },
    api::{handlers::AppState, router::create_router},
    application::library::ServiceDependencies,
    config::{AppConfig, StorageBackend},
    ports::BookRepository,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Initialize adapters
    let book_repository: Arc<dyn BookRepository> = match config.storage {
        StorageBackend::Postgres => {
            tracing::info!("Connecting to database at {}", config.database_target());

            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;

            sqlx::migrate!("./migrations").run(&pool).await?;

            Arc::new(PostgresBookRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::info!("Using in-memory book repository");
            Arc::new(InMemoryBookRepository::new())
        }
    };

    tracing::info!("Registered members: {}", config.member_ids.len());
    let member_validator = Arc::new(MockMemberValidator::with_members(config.member_ids));
    let notifier = Arc::new(MockNotifier::new());

    // Create service dependencies
    let service_deps = ServiceDependencies {
        book_repository,
        member_validator,
        notifier,
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app).await?;

    Ok(())
}
