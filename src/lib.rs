//! prtemplate library root.
//! PR 이벤트에 브랜치별 markdown 템플릿을 적용하는 CI 봇.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::usecases::apply_template::RunOptions;
use domain::run::RunOutcome;
use interface::cli::AppComposition;

/// 라이브러리 직접 호출용 실행 함수.
pub async fn run(options: RunOptions) -> Result<RunOutcome> {
    let composition = AppComposition::default();
    composition.apply_template_usecase().execute(options).await
}
