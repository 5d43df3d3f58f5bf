use std::borrow::Cow;

pub mod models;
pub mod repositories;

/// ドメインエラー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_display::EnumDisplay)]
pub enum DomainErrorKind {
    /// 検証エラー
    Validation,
    /// エンティティが存在しない
    NotFound,
    /// リポジトリエラー
    Repository,
    /// 予期しないエラー
    Unexpected,
}

/// ドメインエラー
#[derive(Debug, thiserror::Error)]
#[error("{kind}: {}", .messages.join(", "))]
pub struct DomainError {
    /// エラー種別
    pub kind: DomainErrorKind,
    /// エラーメッセージ
    pub messages: Vec<Cow<'static, str>>,
    /// エラーの原因
    pub source: anyhow::Error,
}

/// ドメイン結果
pub type DomainResult<T> = Result<T, DomainError>;

/// ドメインエラーを作成する。
pub fn domain_error(kind: DomainErrorKind, message: &'static str) -> DomainError {
    DomainError {
        kind,
        messages: vec![message.into()],
        source: anyhow::anyhow!(message),
    }
}

fn starts_or_ends_with_whitespace(s: &str) -> bool {
    s.chars().next().is_some_and(|ch| ch.is_whitespace())
        || s.chars().last().is_some_and(|ch| ch.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_display() {
        let err = domain_error(DomainErrorKind::NotFound, "Skin analysis not found");
        assert_eq!(err.to_string(), "NotFound: Skin analysis not found");
    }
}
