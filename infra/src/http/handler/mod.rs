pub mod skin_analysis;

use use_case::skin_analysis::SkinAnalysisUseCase;

use crate::{AppState, postgres::repositories::PgSkinAnalysisRepository};

/// ヘルスチェックハンドラ
#[tracing::instrument()]
pub async fn health_check() -> &'static str {
    "Ok, the server is running!"
}

type SkinAnalysisUseCaseImpl = SkinAnalysisUseCase<PgSkinAnalysisRepository>;

fn skin_analysis_use_case(app_state: &AppState) -> SkinAnalysisUseCaseImpl {
    let repo = PgSkinAnalysisRepository::new(app_state.pg_pool.clone());
    SkinAnalysisUseCase::new(repo)
}
