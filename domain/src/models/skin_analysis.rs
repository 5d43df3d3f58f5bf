use garde::Validate as _;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{DomainErrorKind, DomainResult, domain_error, impl_int_primitive, impl_string_primitive};

/// 分析ID
///
/// 肌分析エンジンが分析結果ごとに発行する識別子。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, garde::Validate)]
pub struct AnalysisId(#[garde(length(chars, min = 1, max = 64))] pub String);
impl_string_primitive!(AnalysisId);

/// ユーザーID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, garde::Validate)]
pub struct UserId(#[garde(length(chars, min = 1, max = 64))] pub String);
impl_string_primitive!(UserId);

/// 分析画像URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, garde::Validate)]
pub struct ImageUrl(#[garde(length(chars, min = 1, max = 2048))] pub String);
impl_string_primitive!(ImageUrl);

/// 肌年齢
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, garde::Validate)]
pub struct SkinAge(#[garde(range(min = 1, max = 120))] pub i16);
impl_int_primitive!(SkinAge, i16);

/// 肌指標スコア
///
/// 部位別スコアと総合スコアは、いずれも0から100の整数で表現する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, garde::Validate)]
pub struct MetricScore(#[garde(range(min = 0, max = 100))] pub i16);
impl_int_primitive!(MetricScore, i16);

/// 肌分析結果
///
/// 肌分析エンジンが登録した分析結果で、このシステムからは読み取り専用として扱う。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinAnalysis {
    /// 分析ID
    pub analysis_id: AnalysisId,
    /// ユーザーID
    pub user_id: UserId,
    /// 分析画像URLリスト
    pub image_urls: Vec<ImageUrl>,
    /// 肌年齢
    pub skin_age: SkinAge,
    /// 額のしわスコア
    pub forehead_wrinkle: MetricScore,
    /// 額の色素沈着スコア
    pub forehead_pigmentation: MetricScore,
    /// 眉間のしわスコア
    pub glabella_wrinkle: MetricScore,
    /// 左目元のしわスコア
    pub lefteye_wrinkle: MetricScore,
    /// 右目元のしわスコア
    pub righteye_wrinkle: MetricScore,
    /// 左頬の色素沈着スコア
    pub leftcheek_pigmentation: MetricScore,
    /// 左頬の毛穴スコア
    pub leftcheek_pore: MetricScore,
    /// 右頬の色素沈着スコア
    pub rightcheek_pigmentation: MetricScore,
    /// 右頬の毛穴スコア
    pub rightcheek_pore: MetricScore,
    /// 唇の乾燥スコア
    pub lip_dryness: MetricScore,
    /// フェイスラインのたるみスコア
    pub jawline_sagging: MetricScore,
    /// しわ総合スコア
    pub total_wrinkle: MetricScore,
    /// 色素沈着総合スコア
    pub total_pigmentation: MetricScore,
    /// 毛穴総合スコア
    pub total_pore: MetricScore,
    /// 作成日時
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl SkinAnalysis {
    /// 肌分析結果を新規作成する。
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        analysis_id: AnalysisId,
        user_id: UserId,
        image_urls: Vec<ImageUrl>,
        skin_age: SkinAge,
        forehead_wrinkle: MetricScore,
        forehead_pigmentation: MetricScore,
        glabella_wrinkle: MetricScore,
        lefteye_wrinkle: MetricScore,
        righteye_wrinkle: MetricScore,
        leftcheek_pigmentation: MetricScore,
        leftcheek_pore: MetricScore,
        rightcheek_pigmentation: MetricScore,
        rightcheek_pore: MetricScore,
        lip_dryness: MetricScore,
        jawline_sagging: MetricScore,
        total_wrinkle: MetricScore,
        total_pigmentation: MetricScore,
        total_pore: MetricScore,
        created_at: OffsetDateTime,
    ) -> DomainResult<Self> {
        let analysis = Self {
            analysis_id,
            user_id,
            image_urls,
            skin_age,
            forehead_wrinkle,
            forehead_pigmentation,
            glabella_wrinkle,
            lefteye_wrinkle,
            righteye_wrinkle,
            leftcheek_pigmentation,
            leftcheek_pore,
            rightcheek_pigmentation,
            rightcheek_pore,
            lip_dryness,
            jawline_sagging,
            total_wrinkle,
            total_pigmentation,
            total_pore,
            created_at,
        };
        analysis.validate()?;
        Ok(analysis)
    }

    /// # ドメインルール
    ///
    /// - 分析画像URLは1件以上登録されていなければならない。
    fn validate(&self) -> DomainResult<()> {
        if self.image_urls.is_empty() {
            return Err(domain_error(
                DomainErrorKind::Validation,
                "image_urls must contain at least one url",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    pub fn create_skin_analysis(
        analysis_id: &str,
        user_id: &str,
        image_urls: Vec<&str>,
        created_at: OffsetDateTime,
    ) -> DomainResult<SkinAnalysis> {
        SkinAnalysis::new(
            AnalysisId::new(analysis_id.to_string())?,
            UserId::new(user_id.to_string())?,
            image_urls
                .into_iter()
                .map(|url| ImageUrl::new(url.to_string()))
                .collect::<Result<Vec<_>, _>>()?,
            SkinAge::new(28)?,
            MetricScore::new(10)?,
            MetricScore::new(20)?,
            MetricScore::new(30)?,
            MetricScore::new(40)?,
            MetricScore::new(50)?,
            MetricScore::new(60)?,
            MetricScore::new(70)?,
            MetricScore::new(80)?,
            MetricScore::new(90)?,
            MetricScore::new(15)?,
            MetricScore::new(25)?,
            MetricScore::new(35)?,
            MetricScore::new(45)?,
            MetricScore::new(55)?,
            created_at,
        )
    }

    #[test]
    fn skin_analysis_new() {
        let created_at = datetime!(2024-03-15 10:30:00 UTC);
        let analysis = create_skin_analysis(
            "a1",
            "u1",
            vec!["https://images.example.com/a1/front.jpg"],
            created_at,
        )
        .unwrap();

        assert_eq!(analysis.analysis_id.0, "a1");
        assert_eq!(analysis.user_id.0, "u1");
        assert_eq!(analysis.image_urls.len(), 1);
        assert_eq!(analysis.skin_age.0, 28);
        assert_eq!(analysis.total_pore.0, 55);
        assert_eq!(analysis.created_at, created_at);
    }

    #[test]
    fn skin_analysis_new_without_image_urls() {
        let result = create_skin_analysis("a1", "u1", vec![], datetime!(2024-03-15 10:30:00 UTC));
        assert!(result.is_err());
        assert_eq!(result.err().unwrap().kind, crate::DomainErrorKind::Validation);
    }

    #[rstest::rstest]
    #[case(1, true)]
    #[case(120, true)]
    #[case(0, false)]
    #[case(121, false)]
    fn skin_age_range(#[case] value: i16, #[case] expected: bool) {
        assert_eq!(SkinAge::new(value).is_ok(), expected);
    }

    #[rstest::rstest]
    #[case(0, true)]
    #[case(100, true)]
    #[case(-1, false)]
    #[case(101, false)]
    fn metric_score_range(#[case] value: i16, #[case] expected: bool) {
        assert_eq!(MetricScore::new(value).is_ok(), expected);
    }

    #[test]
    fn skin_analysis_serialize_created_at_as_rfc3339() {
        let analysis = create_skin_analysis(
            "a1",
            "u1",
            vec!["https://images.example.com/a1/front.jpg"],
            datetime!(2024-03-15 10:30:00 UTC),
        )
        .unwrap();
        let value = serde_json::to_value(&analysis).unwrap();
        assert_eq!(value["created_at"], "2024-03-15T10:30:00Z");
    }
}
