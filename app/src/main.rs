use anyhow::Context as _;
use tokio::net::TcpListener;

use infra::AppState;

use app::{create_pg_pool, get_subscriber, init_subscriber, load_app_settings, routes::create_router};

/// アプリケーションエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // アプリケーション設定を読み込み
    let app_settings = load_app_settings("app_settings.toml")?;

    // ロギングを初期化
    let subscriber = get_subscriber(
        String::from("skin-analysis-api"),
        log::Level::Info,
        std::io::stdout,
    );
    init_subscriber(subscriber);

    // データベース接続プールを作成
    let pool = create_pg_pool(&app_settings.database).await?;

    // ルーターを作成
    let app_state = AppState {
        app_settings: app_settings.clone(),
        pg_pool: pool,
    };
    let router = create_router(app_state);

    // HTTPサーバーを起動
    let address = app_settings.http_server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .context("Failed to bind to the address for the HTTP server")?;
    tracing::info!("HTTP server is running on {}", address);
    axum::serve(listener, router)
        .await
        .context("Failed to start the HTTP server")?;

    Ok(())
}
