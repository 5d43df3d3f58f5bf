mod skin_analysis;

pub use skin_analysis::*;

use std::marker::PhantomData;

use sqlx::PgPool;

use domain::{DomainError, DomainErrorKind};

/// PostgreSQLリポジトリ
pub struct PgRepository<T> {
    pub pool: PgPool,
    _marker: PhantomData<T>,
}

impl<T> PgRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }
}

/// SQLxのエラーをリポジトリエラーに変換する。
///
/// 発生したエラーは診断のために原因として保持する。
pub fn repository_error(e: sqlx::Error) -> DomainError {
    DomainError {
        kind: DomainErrorKind::Repository,
        messages: vec![e.to_string().into()],
        source: e.into(),
    }
}
