use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::{listener::TcpListener, Server};
use sea_orm::Database;

use studio_portal_backend::api::build_app;
use studio_portal_backend::config::{init_logging, ApplicationSettings, SystemEnvironment};
use studio_portal_backend::services::AuthService;
use studio_portal_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let settings =
        ApplicationSettings::load(&SystemEnvironment).expect("Invalid application configuration");

    let db = Database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Connected to database: {}", settings.database_url);

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("Database migrations completed");

    let bind_addr = settings.bind_addr.clone();
    let app_data = Arc::new(
        AppData::init(db, settings)
            .await
            .expect("Failed to initialize application data"),
    );

    // First-boot admin provisioning; a no-op when the account exists
    AuthService::new(app_data.credential_store.clone())
        .ensure_seed_admin()
        .await
        .expect("Failed to provision admin account");

    let app = build_app(app_data);

    tracing::info!("Starting server on http://{}", bind_addr);
    tracing::info!("Swagger UI available under /swagger");

    Server::new(TcpListener::bind(bind_addr)).run(app).await
}
