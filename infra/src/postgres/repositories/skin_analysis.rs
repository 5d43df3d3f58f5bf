use sqlx::Postgres;
use time::OffsetDateTime;

use domain::{
    DomainError, DomainResult,
    models::{AnalysisId, ImageUrl, SkinAnalysis, UserId},
    repositories::SkinAnalysisRepository,
};

use super::{PgRepository, repository_error};

pub type PgSkinAnalysisRepository = PgRepository<SkinAnalysis>;

const SELECT_COLUMNS: &str = r#"
    analysis_id, user_id, image_urls, skin_age,
    forehead_wrinkle, forehead_pigmentation, glabella_wrinkle,
    lefteye_wrinkle, righteye_wrinkle,
    leftcheek_pigmentation, leftcheek_pore,
    rightcheek_pigmentation, rightcheek_pore,
    lip_dryness, jawline_sagging,
    total_wrinkle, total_pigmentation, total_pore,
    created_at
"#;

#[async_trait::async_trait]
impl SkinAnalysisRepository for PgSkinAnalysisRepository {
    /// 分析IDで肌分析結果を取得する。
    async fn by_analysis_id(&self, id: &AnalysisId) -> DomainResult<Option<SkinAnalysis>> {
        let sql = format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM skin_analyses
            WHERE analysis_id = $1
            "#
        );
        let row = sqlx::query_as::<Postgres, SkinAnalysisRow>(&sql)
            .bind(&id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;
        row.map(SkinAnalysis::try_from).transpose()
    }

    /// ユーザーの肌分析結果をすべて取得する。
    async fn list_by_user_id(&self, user_id: &UserId) -> DomainResult<Vec<SkinAnalysis>> {
        let sql = format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM skin_analyses
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#
        );
        sqlx::query_as::<Postgres, SkinAnalysisRow>(&sql)
            .bind(&user_id.0)
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?
            .into_iter()
            .map(SkinAnalysis::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    /// 期間内に作成されたユーザーの肌分析結果を取得する。
    ///
    /// 期間は`start <= created_at < end`の半開区間として判定して、
    /// 期間内に複数の結果が存在する場合は作成日時が最も新しい結果を返す。
    async fn by_user_id_between(
        &self,
        user_id: &UserId,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> DomainResult<Option<SkinAnalysis>> {
        let sql = format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM skin_analyses
            WHERE user_id = $1 AND created_at >= $2 AND created_at < $3
            ORDER BY created_at DESC
            LIMIT 1
            "#
        );
        let row = sqlx::query_as::<Postgres, SkinAnalysisRow>(&sql)
            .bind(&user_id.0)
            .bind(start)
            .bind(end)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;
        row.map(SkinAnalysis::try_from).transpose()
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SkinAnalysisRow {
    analysis_id: String,
    user_id: String,
    image_urls: Vec<String>,
    skin_age: i16,
    forehead_wrinkle: i16,
    forehead_pigmentation: i16,
    glabella_wrinkle: i16,
    lefteye_wrinkle: i16,
    righteye_wrinkle: i16,
    leftcheek_pigmentation: i16,
    leftcheek_pore: i16,
    rightcheek_pigmentation: i16,
    rightcheek_pore: i16,
    lip_dryness: i16,
    jawline_sagging: i16,
    total_wrinkle: i16,
    total_pigmentation: i16,
    total_pore: i16,
    created_at: OffsetDateTime,
}

impl TryFrom<SkinAnalysisRow> for SkinAnalysis {
    type Error = DomainError;

    fn try_from(row: SkinAnalysisRow) -> Result<Self, Self::Error> {
        SkinAnalysis::new(
            row.analysis_id.try_into()?,
            row.user_id.try_into()?,
            row.image_urls
                .into_iter()
                .map(ImageUrl::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            row.skin_age.try_into()?,
            row.forehead_wrinkle.try_into()?,
            row.forehead_pigmentation.try_into()?,
            row.glabella_wrinkle.try_into()?,
            row.lefteye_wrinkle.try_into()?,
            row.righteye_wrinkle.try_into()?,
            row.leftcheek_pigmentation.try_into()?,
            row.leftcheek_pore.try_into()?,
            row.rightcheek_pigmentation.try_into()?,
            row.rightcheek_pore.try_into()?,
            row.lip_dryness.try_into()?,
            row.jawline_sagging.try_into()?,
            row.total_wrinkle.try_into()?,
            row.total_pigmentation.try_into()?,
            row.total_pore.try_into()?,
            row.created_at,
        )
    }
}
