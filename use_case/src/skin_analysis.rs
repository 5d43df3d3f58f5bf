use time::{Date, Duration};

use domain::{
    DomainErrorKind, DomainResult, domain_error,
    models::{AnalysisId, SkinAnalysis, UserId},
    repositories::SkinAnalysisRepository,
};

/// 肌分析結果ユースケース
pub struct SkinAnalysisUseCase<R>
where
    R: SkinAnalysisRepository,
{
    pub repo: R,
}

impl<R> SkinAnalysisUseCase<R>
where
    R: SkinAnalysisRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// 分析IDで肌分析結果を取得する。
    pub async fn by_id(&self, id: &AnalysisId) -> DomainResult<SkinAnalysis> {
        self.repo
            .by_analysis_id(id)
            .await?
            .ok_or_else(|| domain_error(DomainErrorKind::NotFound, "Skin analysis not found"))
    }

    /// ユーザーが肌分析を実施した日付のリストを返す。
    ///
    /// 日付は新しい順に並べ、同じ日に複数の分析結果がある場合は1つの日付にまとめる。
    /// 分析結果が存在しないユーザーの場合はエラーではなく空のリストを返す。
    pub async fn analysis_dates(&self, user_id: &UserId) -> DomainResult<Vec<Date>> {
        let analyses = self.repo.list_by_user_id(user_id).await?;
        let mut dates: Vec<Date> = analyses
            .iter()
            .map(|analysis| analysis.created_at.date())
            .collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.dedup();
        Ok(dates)
    }

    /// ユーザーが指定した日付に実施した肌分析の結果を取得する。
    ///
    /// 指定した日付は`[指定日 00:00, 翌日 00:00)`の半開区間として判定する。
    pub async fn by_user_and_date(
        &self,
        user_id: &UserId,
        date: Date,
    ) -> DomainResult<SkinAnalysis> {
        let start = date.midnight().assume_utc();
        let end = start + Duration::days(1);
        self.repo
            .by_user_id_between(user_id, start, end)
            .await?
            .ok_or_else(|| {
                domain_error(
                    DomainErrorKind::NotFound,
                    "Skin analysis for the date not found",
                )
            })
    }
}
