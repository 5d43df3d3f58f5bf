use time::OffsetDateTime;

use crate::DomainResult;
use crate::models::{AnalysisId, SkinAnalysis, UserId};

/// 肌分析結果リポジトリ
///
/// 肌分析結果はこのシステムの外部で登録されるため、読み取り操作のみを提供する。
/// インフラストラクチャ障害は`DomainErrorKind::Repository`として通知し、
/// 該当データが存在しないことはエラーではなく`None`または空のリストで表現する。
#[async_trait::async_trait]
pub trait SkinAnalysisRepository {
    /// 分析IDで肌分析結果を取得する。
    async fn by_analysis_id(&self, id: &AnalysisId) -> DomainResult<Option<SkinAnalysis>>;

    /// ユーザーの肌分析結果をすべて取得する。
    async fn list_by_user_id(&self, user_id: &UserId) -> DomainResult<Vec<SkinAnalysis>>;

    /// 期間内に作成されたユーザーの肌分析結果を取得する。
    ///
    /// 期間は`start <= created_at < end`の半開区間として判定する。
    /// 期間内に複数の結果が存在する場合は、作成日時が最も新しい結果を返す。
    async fn by_user_id_between(
        &self,
        user_id: &UserId,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> DomainResult<Option<SkinAnalysis>>;
}
