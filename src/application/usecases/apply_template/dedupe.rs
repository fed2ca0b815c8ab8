//! 봇 코멘트 존재 여부 기반 중복 방지 단계.

use anyhow::Result;
use tracing::debug;

use crate::application::usecases::apply_template::{
    ALREADY_COMMENTED_NOTICE, ApplyTemplateUseCase, context::ExecutionContext,
};
use crate::domain::comment::has_comment_by;

pub(super) enum DedupeDecision {
    Skip,
    Continue,
}

/// 봇 login으로 작성된 코멘트가 하나라도 있으면 건너뛴다.
pub(super) async fn check_existing_comment(
    use_case: &ApplyTemplateUseCase<'_>,
    ctx: &ExecutionContext,
) -> Result<DedupeDecision> {
    let Some(tracker) = ctx.tracker.as_ref() else {
        debug!("dedupe skipped: no API access in dry-run");
        return Ok(DedupeDecision::Continue);
    };

    let comments = tracker.list_comments().await?;
    if has_comment_by(&comments, &ctx.settings.bot_login) {
        use_case.reporter.info(ALREADY_COMMENTED_NOTICE);
        return Ok(DedupeDecision::Skip);
    }

    Ok(DedupeDecision::Continue)
}
