//! 실행 컨텍스트(설정/대상 PR/API 게이트웨이) 준비 단계.

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::config::Settings;
use crate::application::ports::IssueTrackerGateway;
use crate::application::usecases::apply_template::{ApplyTemplateUseCase, RunOptions};
use crate::domain::event::PullRequestContext;

/// 유스케이스 전 구간에서 공유되는 실행 상태.
pub(super) struct ExecutionContext {
    pub settings: Settings,
    pub target: PullRequestContext,
    /// dry-run에서는 API를 호출하지 않으므로 None
    pub tracker: Option<Box<dyn IssueTrackerGateway>>,
}

/// 설정 로딩/검증, 이벤트 페이로드 해석, 게이트웨이 생성까지 선행한다.
pub(super) fn load_execution_context(
    use_case: &ApplyTemplateUseCase<'_>,
    options: &RunOptions,
) -> Result<ExecutionContext> {
    let config = use_case
        .config_repo
        .load(&options.overrides)
        .context("failed to load prtemplate config")?;
    let settings = config.settings(!options.dry_run)?;

    let target = use_case
        .event_source
        .pull_request()
        .context("failed to read pull_request event payload")?;

    debug!(
        pr = %target.slug(),
        branch = %target.head_ref,
        dry_run = options.dry_run,
        "resolved pull request target"
    );

    let tracker = match (&settings.token, options.dry_run) {
        (Some(token), false) => Some(use_case.tracker_factory.build(
            &target,
            &settings.api_base,
            token.clone(),
        )?),
        _ => None,
    };

    Ok(ExecutionContext {
        settings,
        target,
        tracker,
    })
}
