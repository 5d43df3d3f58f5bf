//! This module sets up and runs integration tests
//!
//! The integration test uses the same PostgreSQL container as the development environment.
//! But, it creates a separate test database for integration tests.
//! The test database is named in the format `test_skin_analysis_db_<uuid>`,
//! where `<uuid>` is the UUID with hyphens replaced by underscores.
//!
//! [NOTICE]
//!
//! A test database is created for each test run, so the test databases must be
//! dropped manually after test sessions.
use std::path::Path;

use once_cell::sync::Lazy;
use sqlx::{Connection as _, Executor as _, PgConnection, PgPool};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

use app::{bind_address, create_pg_pool, get_subscriber, init_subscriber, load_app_settings, routes::create_router};
use infra::AppState;
use settings::{AppSettings, DatabaseSettings};

/// Initializes tracing only once for the whole test binary
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(String::from("test"), log::Level::Debug, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(String::from("test"), log::Level::Debug, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub fn load_app_settings_for_testing() -> AppSettings {
    let dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set");
    let path = Path::new(&dir).join("..").join("app_settings.toml");
    load_app_settings(path.as_os_str().to_str().unwrap()).unwrap()
}

pub struct TestApp {
    pub app_settings: AppSettings,
    pub listener: TcpListener,
    pub pg_pool: PgPool,
}

pub async fn configure_test_app(mut app_settings: AppSettings) -> TestApp {
    Lazy::force(&TRACING);

    // Set up the test database
    let database_name =
        format!("test_skin_analysis_db_{}", uuid::Uuid::new_v4()).replace('-', "_");
    app_settings.database.database = database_name;
    let pg_pool = setup_database(&app_settings.database).await;

    // Specify a random port for the HTTP server to bind
    app_settings.http_server.port = 0;
    let (listener, port) = bind_address(&app_settings.http_server).await.unwrap();
    app_settings.http_server.port = port;

    TestApp {
        app_settings,
        listener,
        pg_pool,
    }
}

/// Sets up the PostgreSQL database for testing
async fn setup_database(settings: &DatabaseSettings) -> PgPool {
    // Connect to the **postgres** database to create the test database
    let postgres_settings = DatabaseSettings {
        database: String::from("postgres"),
        ..settings.clone()
    };
    let mut conn = PgConnection::connect(&postgres_settings.uri())
        .await
        .expect("Failed to connect to Postgres");
    conn.execute(format!(r#"CREATE DATABASE "{}";"#, settings.database).as_str())
        .await
        .expect("Failed to create the test database");

    // Run the migrations on the test database
    let pool = create_pg_pool(settings)
        .await
        .expect("Failed to connect to the test database");
    sqlx::migrate!("../migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Spawns the application with a graceful shutdown signal
pub fn spawn_app(app_state: AppState, listener: TcpListener) -> (JoinHandle<()>, oneshot::Sender<()>) {
    let router = create_router(app_state);
    let (shutdown_signal, shutdown_receiver) = oneshot::channel::<()>();
    let app_handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown_receiver.await.ok();
            })
            .await
            .expect("Failed to run the HTTP server");
    });

    (app_handle, shutdown_signal)
}
