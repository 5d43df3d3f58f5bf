use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use domain::models::{AnalysisId, SkinAnalysis, UserId};
use utils::{serde::deserialize_date, time::DATE_FORMAT};

use crate::{
    AppState,
    http::{ApiError, ApiResult, internal_server_error},
};

use super::skin_analysis_use_case;

/// 分析IDで肌分析結果を取得するハンドラ
#[tracing::instrument(skip(app_state))]
pub async fn by_id(
    State(app_state): State<AppState>,
    Path(analysis_id): Path<String>,
) -> ApiResult<Json<SkinAnalysisResponse>> {
    let analysis_id = AnalysisId::new(analysis_id).map_err(ApiError::from)?;
    let use_case = skin_analysis_use_case(&app_state);
    let analysis = use_case.by_id(&analysis_id).await.map_err(ApiError::from)?;
    Ok(Json(SkinAnalysisResponse::from(analysis)))
}

/// ユーザーが肌分析を実施した日付のリストを取得するハンドラ
///
/// 日付は`YYYY-MM-DD`形式の文字列で、新しい順に返す。
#[tracing::instrument(skip(app_state))]
pub async fn analysis_dates(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<String>>> {
    let user_id = UserId::new(user_id).map_err(ApiError::from)?;
    let use_case = skin_analysis_use_case(&app_state);
    let dates = use_case
        .analysis_dates(&user_id)
        .await
        .map_err(ApiError::from)?;
    let dates = dates
        .iter()
        .map(|date| date.format(&DATE_FORMAT))
        .collect::<Result<Vec<_>, _>>()
        .map_err(internal_server_error)?;
    Ok(Json(dates))
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisDateQueryParams {
    /// 分析を実施した日付（`YYYY-MM-DD`）
    #[serde(deserialize_with = "deserialize_date")]
    pub date: Date,
}

/// ユーザーが指定した日付に実施した肌分析の結果を取得するハンドラ
#[tracing::instrument(skip(app_state))]
pub async fn by_date(
    State(app_state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<AnalysisDateQueryParams>,
) -> ApiResult<Json<SkinAnalysisResponse>> {
    let user_id = UserId::new(user_id).map_err(ApiError::from)?;
    let use_case = skin_analysis_use_case(&app_state);
    let analysis = use_case
        .by_user_and_date(&user_id, query.date)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(SkinAnalysisResponse::from(analysis)))
}

/// 肌分析結果レスポンスボディ
///
/// 肌分析結果の項目をそのまま写した射影で、リクエストごとに新規作成する。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinAnalysisResponse {
    /// 分析画像URLリスト
    pub image_urls: Vec<String>,
    /// 肌年齢
    pub skin_age: i16,
    /// 額のしわスコア
    pub forehead_wrinkle: i16,
    /// 額の色素沈着スコア
    pub forehead_pigmentation: i16,
    /// 眉間のしわスコア
    pub glabella_wrinkle: i16,
    /// 左目元のしわスコア
    pub lefteye_wrinkle: i16,
    /// 右目元のしわスコア
    pub righteye_wrinkle: i16,
    /// 左頬の色素沈着スコア
    pub leftcheek_pigmentation: i16,
    /// 左頬の毛穴スコア
    pub leftcheek_pore: i16,
    /// 右頬の色素沈着スコア
    pub rightcheek_pigmentation: i16,
    /// 右頬の毛穴スコア
    pub rightcheek_pore: i16,
    /// 唇の乾燥スコア
    pub lip_dryness: i16,
    /// フェイスラインのたるみスコア
    pub jawline_sagging: i16,
    /// しわ総合スコア
    pub total_wrinkle: i16,
    /// 色素沈着総合スコア
    pub total_pigmentation: i16,
    /// 毛穴総合スコア
    pub total_pore: i16,
    /// 作成日時
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<SkinAnalysis> for SkinAnalysisResponse {
    fn from(analysis: SkinAnalysis) -> Self {
        Self {
            image_urls: analysis.image_urls.into_iter().map(|url| url.0).collect(),
            skin_age: analysis.skin_age.0,
            forehead_wrinkle: analysis.forehead_wrinkle.0,
            forehead_pigmentation: analysis.forehead_pigmentation.0,
            glabella_wrinkle: analysis.glabella_wrinkle.0,
            lefteye_wrinkle: analysis.lefteye_wrinkle.0,
            righteye_wrinkle: analysis.righteye_wrinkle.0,
            leftcheek_pigmentation: analysis.leftcheek_pigmentation.0,
            leftcheek_pore: analysis.leftcheek_pore.0,
            rightcheek_pigmentation: analysis.rightcheek_pigmentation.0,
            rightcheek_pore: analysis.rightcheek_pore.0,
            lip_dryness: analysis.lip_dryness.0,
            jawline_sagging: analysis.jawline_sagging.0,
            total_wrinkle: analysis.total_wrinkle.0,
            total_pigmentation: analysis.total_pigmentation.0,
            total_pore: analysis.total_pore.0,
            created_at: analysis.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use domain::models::{ImageUrl, MetricScore, SkinAge};

    use super::*;

    fn create_skin_analysis() -> SkinAnalysis {
        SkinAnalysis::new(
            AnalysisId::new("a1".to_string()).unwrap(),
            UserId::new("u1".to_string()).unwrap(),
            vec![
                ImageUrl::new("https://images.example.com/a1/front.jpg".to_string()).unwrap(),
                ImageUrl::new("https://images.example.com/a1/left.jpg".to_string()).unwrap(),
            ],
            SkinAge::new(28).unwrap(),
            MetricScore::new(10).unwrap(),
            MetricScore::new(20).unwrap(),
            MetricScore::new(30).unwrap(),
            MetricScore::new(40).unwrap(),
            MetricScore::new(50).unwrap(),
            MetricScore::new(60).unwrap(),
            MetricScore::new(70).unwrap(),
            MetricScore::new(80).unwrap(),
            MetricScore::new(90).unwrap(),
            MetricScore::new(15).unwrap(),
            MetricScore::new(25).unwrap(),
            MetricScore::new(35).unwrap(),
            MetricScore::new(45).unwrap(),
            MetricScore::new(55).unwrap(),
            datetime!(2024-03-15 10:30:00 UTC),
        )
        .unwrap()
    }

    #[test]
    fn skin_analysis_response_copies_all_fields() {
        let analysis = create_skin_analysis();
        let response = SkinAnalysisResponse::from(analysis.clone());

        assert_eq!(
            response.image_urls,
            vec![
                "https://images.example.com/a1/front.jpg",
                "https://images.example.com/a1/left.jpg",
            ]
        );
        assert_eq!(response.skin_age, analysis.skin_age.0);
        assert_eq!(response.forehead_wrinkle, analysis.forehead_wrinkle.0);
        assert_eq!(response.forehead_pigmentation, analysis.forehead_pigmentation.0);
        assert_eq!(response.glabella_wrinkle, analysis.glabella_wrinkle.0);
        assert_eq!(response.lefteye_wrinkle, analysis.lefteye_wrinkle.0);
        assert_eq!(response.righteye_wrinkle, analysis.righteye_wrinkle.0);
        assert_eq!(response.leftcheek_pigmentation, analysis.leftcheek_pigmentation.0);
        assert_eq!(response.leftcheek_pore, analysis.leftcheek_pore.0);
        assert_eq!(response.rightcheek_pigmentation, analysis.rightcheek_pigmentation.0);
        assert_eq!(response.rightcheek_pore, analysis.rightcheek_pore.0);
        assert_eq!(response.lip_dryness, analysis.lip_dryness.0);
        assert_eq!(response.jawline_sagging, analysis.jawline_sagging.0);
        assert_eq!(response.total_wrinkle, analysis.total_wrinkle.0);
        assert_eq!(response.total_pigmentation, analysis.total_pigmentation.0);
        assert_eq!(response.total_pore, analysis.total_pore.0);
        assert_eq!(response.created_at, analysis.created_at);
    }

    #[test]
    fn skin_analysis_response_serializes_with_camel_case_keys() {
        let response = SkinAnalysisResponse::from(create_skin_analysis());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["skinAge"], 28);
        assert_eq!(value["foreheadWrinkle"], 10);
        assert_eq!(value["jawlineSagging"], 25);
        assert_eq!(value["totalPore"], 55);
        assert_eq!(value["imageUrls"][0], "https://images.example.com/a1/front.jpg");
        assert_eq!(value["createdAt"], "2024-03-15T10:30:00Z");
    }
}
