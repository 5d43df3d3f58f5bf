use std::time::Duration;

use time::OffsetDateTime;
use tokio::{sync::oneshot, task::JoinHandle};

use domain::models::{
    AnalysisId, ImageUrl, MetricScore, SkinAge, SkinAnalysis, UserId,
};
use infra::AppState;
use settings::AppSettings;

use crate::helpers::{TestApp, configure_test_app, spawn_app};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Test case for integration tests
pub struct TestCase {
    pub app_state: AppState,
    app_handle: JoinHandle<()>,
    shutdown_signal: oneshot::Sender<()>,
    pub http_client: reqwest::Client,
}

impl TestCase {
    pub async fn begin(app_settings: AppSettings) -> Self {
        let app = configure_test_app(app_settings).await;
        let TestApp {
            app_settings,
            listener,
            pg_pool,
        } = app;
        let app_state = AppState {
            app_settings,
            pg_pool,
        };
        let (app_handle, shutdown_signal) = spawn_app(app_state.clone(), listener);
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap();
        Self {
            app_state,
            app_handle,
            shutdown_signal,
            http_client,
        }
    }

    pub async fn end(self) {
        self.shutdown_signal.send(()).unwrap();
        self.app_handle.await.unwrap();
    }

    pub fn origin(&self) -> String {
        format!(
            "{}://{}:{}",
            self.app_state.app_settings.http_server.protocol,
            self.app_state.app_settings.http_server.host,
            self.app_state.app_settings.http_server.port,
        )
    }

    /// 肌分析結果をテストデータベースに登録する。
    pub async fn insert_skin_analysis(&self, analysis: &SkinAnalysis) {
        sqlx::query(
            r#"
            INSERT INTO skin_analyses (
                analysis_id, user_id, image_urls, skin_age,
                forehead_wrinkle, forehead_pigmentation, glabella_wrinkle,
                lefteye_wrinkle, righteye_wrinkle,
                leftcheek_pigmentation, leftcheek_pore,
                rightcheek_pigmentation, rightcheek_pore,
                lip_dryness, jawline_sagging,
                total_wrinkle, total_pigmentation, total_pore,
                created_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18, $19
            )
            "#,
        )
        .bind(&analysis.analysis_id.0)
        .bind(&analysis.user_id.0)
        .bind(
            analysis
                .image_urls
                .iter()
                .map(|url| url.0.clone())
                .collect::<Vec<String>>(),
        )
        .bind(analysis.skin_age.0)
        .bind(analysis.forehead_wrinkle.0)
        .bind(analysis.forehead_pigmentation.0)
        .bind(analysis.glabella_wrinkle.0)
        .bind(analysis.lefteye_wrinkle.0)
        .bind(analysis.righteye_wrinkle.0)
        .bind(analysis.leftcheek_pigmentation.0)
        .bind(analysis.leftcheek_pore.0)
        .bind(analysis.rightcheek_pigmentation.0)
        .bind(analysis.rightcheek_pore.0)
        .bind(analysis.lip_dryness.0)
        .bind(analysis.jawline_sagging.0)
        .bind(analysis.total_wrinkle.0)
        .bind(analysis.total_pigmentation.0)
        .bind(analysis.total_pore.0)
        .bind(analysis.created_at)
        .execute(&self.app_state.pg_pool)
        .await
        .unwrap();
    }

    pub async fn get_analysis(&self, analysis_id: &str) -> reqwest::Response {
        let uri = format!("{}/analyses/{}", self.origin(), analysis_id);
        self.http_client.get(&uri).send().await.unwrap()
    }

    pub async fn get_analysis_dates(&self, user_id: &str) -> reqwest::Response {
        let uri = format!("{}/analyses/users/{}/dates", self.origin(), user_id);
        self.http_client.get(&uri).send().await.unwrap()
    }

    pub async fn get_analysis_by_date(&self, user_id: &str, date: &str) -> reqwest::Response {
        let uri = format!(
            "{}/analyses/users/{}/by-date?date={}",
            self.origin(),
            user_id,
            date
        );
        self.http_client.get(&uri).send().await.unwrap()
    }
}

/// テストで使用する肌分析結果を作成する。
pub fn create_skin_analysis(
    analysis_id: &str,
    user_id: &str,
    created_at: OffsetDateTime,
) -> SkinAnalysis {
    SkinAnalysis::new(
        AnalysisId::new(analysis_id.to_string()).unwrap(),
        UserId::new(user_id.to_string()).unwrap(),
        vec![
            ImageUrl::new(format!(
                "https://images.example.com/{}/front.jpg",
                analysis_id
            ))
            .unwrap(),
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
        created_at,
    )
    .unwrap()
}
