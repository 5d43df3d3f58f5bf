use secrecy::{ExposeSecret as _, SecretString};
use serde::Deserialize;

/// アプリケーション設定
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// HTTPサーバー設定
    pub http_server: HttpServerSettings,
    /// データベース設定
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename = "protocol")]
#[serde(rename_all = "lowercase")]
pub enum HttpProtocol {
    /// HTTPプロトコル
    Http,
    /// HTTPSプロトコル
    Https,
}

impl std::fmt::Display for HttpProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpProtocol::Http => write!(f, "http"),
            HttpProtocol::Https => write!(f, "https"),
        }
    }
}

/// HTTPサーバー設定
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerSettings {
    /// プロトコル
    pub protocol: HttpProtocol,
    /// ホスト名
    pub host: String,
    /// ポート番号
    pub port: u16,
}

/// データベース設定
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// ホスト名
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// ユーザー名
    pub user: String,
    /// パスワード
    pub password: SecretString,
    /// データベース名
    pub database: String,
    /// 最大接続数
    pub max_connections: u32,
    /// 接続タイムアウト（秒）
    pub connection_timeout: u64,
}

impl HttpServerSettings {
    /// バインドするアドレス（ホスト名とポート番号）を返す。
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseSettings {
    /// データベースURIを返す。
    pub fn uri(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user,
            self.password.expose_secret(),
            self.host,
            self.port,
            self.database
        )
    }
}
