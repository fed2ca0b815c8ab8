//! PR 이벤트부터 템플릿 해석, 본문 갱신/안내 코멘트까지의 오케스트레이션 유스케이스.

mod context;
mod dedupe;
mod publish;
mod resolve;


use anyhow::Result;
use tracing::debug;

use crate::application::config::Config;
use crate::application::ports::{
    ConfigRepository, EventSource, IssueTrackerFactory, Reporter, TemplateStore,
};
use crate::domain::event::is_pull_request_event;
use crate::domain::run::RunOutcome;

use context::load_execution_context;
use dedupe::{DedupeDecision, check_existing_comment};
use publish::{print_dry_run, publish_template};
use resolve::resolve_template_filename;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// API 호출 없이 선택된 템플릿만 출력
    pub dry_run: bool,
    /// CLI 플래그로 전달된 설정(최우선)
    pub overrides: Config,
}

pub const NOT_PULL_REQUEST_NOTICE: &str = "[!] Commenting only works on pull_request event!";
pub const ALREADY_COMMENTED_NOTICE: &str = "[!] The bot has already commented on this PR!";

/// 트리거 가드, 중복 방지, 템플릿 해석, 게시까지 전체 흐름을 조율한다.
pub struct ApplyTemplateUseCase<'a> {
    pub event_source: &'a dyn EventSource,
    pub config_repo: &'a dyn ConfigRepository,
    pub template_store: &'a dyn TemplateStore,
    pub tracker_factory: &'a dyn IssueTrackerFactory,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ApplyTemplateUseCase<'a> {
    /// 실행 진입점.
    /// pull_request 이외 이벤트와 이미 코멘트한 PR은 실패 없이 종료한다.
    pub async fn execute(&self, options: RunOptions) -> Result<RunOutcome> {
        let event_name = self.event_source.event_name().unwrap_or_default();
        if !is_pull_request_event(&event_name) {
            debug!(event = %event_name, "not a pull_request event");
            self.reporter.info(NOT_PULL_REQUEST_NOTICE);
            return Ok(RunOutcome::NotApplicableEvent { event_name });
        }

        let ctx = load_execution_context(self, &options)?;

        if let DedupeDecision::Skip = check_existing_comment(self, &ctx).await? {
            return Ok(RunOutcome::AlreadyCommented);
        }

        let filename = resolve_template_filename(self, &ctx)?;

        if options.dry_run {
            print_dry_run(self, &ctx, &filename)?;
            return Ok(RunOutcome::DryRun { filename });
        }

        publish_template(self, &ctx, &filename).await?;
        Ok(RunOutcome::Published { filename })
    }
}
