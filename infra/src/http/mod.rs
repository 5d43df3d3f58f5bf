pub mod handler;

use std::borrow::Cow;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use domain::{DomainError, DomainErrorKind};

/// API結果
pub type ApiResult<T> = Result<T, ApiError>;

/// APIエラー
pub struct ApiError {
    /// HTTPステータスコード
    pub status_code: StatusCode,
    /// エラーメッセージ
    pub messages: Vec<Cow<'static, str>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "messages": self.messages,
        });
        (self.status_code, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        let status_code = match error.kind {
            DomainErrorKind::Validation => StatusCode::BAD_REQUEST,
            DomainErrorKind::NotFound => StatusCode::NOT_FOUND,
            DomainErrorKind::Repository => StatusCode::INTERNAL_SERVER_ERROR,
            DomainErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // インフラストラクチャ障害の原因はレスポンスに含めず、ログにのみ出力する
        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{:?}", error.source);
        }
        Self {
            status_code,
            messages: error.messages,
        }
    }
}

pub fn internal_server_error<E: std::error::Error>(err: E) -> ApiError {
    ApiError {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        messages: vec![err.to_string().into()],
    }
}
