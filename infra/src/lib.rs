pub mod http;
pub mod postgres;

use settings::AppSettings;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// アプリケーション設定
    pub app_settings: AppSettings,
    /// PostgreSQLコネクションプール
    pub pg_pool: sqlx::PgPool,
}
