//! PR 본문 갱신 및 안내 코멘트 게시 단계.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::usecases::apply_template::{ApplyTemplateUseCase, context::ExecutionContext};

/// 본문 갱신 후 안내 코멘트를 작성한다.
/// 두 호출은 트랜잭션이 아니므로 두 번째 실패 시 본문만 갱신된 상태로 남는다.
pub(super) async fn publish_template(
    use_case: &ApplyTemplateUseCase<'_>,
    ctx: &ExecutionContext,
    filename: &str,
) -> Result<()> {
    let tracker = ctx
        .tracker
        .as_ref()
        .context("internal error: missing API gateway for non-dry-run")?;

    let body = use_case
        .template_store
        .read(&ctx.settings.template_dir, filename)?;

    tracker
        .update_pull_request_body(&body)
        .await
        .context("failed to update pull request body")?;
    debug!(pr = %ctx.target.slug(), "pull request body updated");

    let comment = tracker
        .create_comment(&ctx.settings.reminder)
        .await
        .context("pull request body was updated but the reminder comment was not posted")?;

    info!(
        pr = %ctx.target.slug(),
        template = filename,
        comment_id = %comment.id,
        "template applied"
    );
    Ok(())
}

/// dry-run: 게시 대신 선택된 템플릿 본문을 출력한다.
pub(super) fn print_dry_run(
    use_case: &ApplyTemplateUseCase<'_>,
    ctx: &ExecutionContext,
    filename: &str,
) -> Result<()> {
    let body = use_case
        .template_store
        .read(&ctx.settings.template_dir, filename)?;

    use_case.reporter.section("Dry Run: Target");
    use_case.reporter.kv("Pull request", &ctx.target.slug());
    use_case.reporter.kv("Branch", &ctx.target.head_ref);
    use_case.reporter.kv("Template", filename);
    use_case.reporter.section("Dry Run: Pull Request Body");
    use_case.reporter.raw(&body);
    use_case.reporter.section("Dry Run: Reminder Comment");
    use_case.reporter.raw(&ctx.settings.reminder);
    Ok(())
}
