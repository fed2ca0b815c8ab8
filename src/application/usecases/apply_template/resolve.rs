//! 브랜치 → 템플릿 파일명 해석 단계.

use anyhow::Result;
use tracing::debug;

use crate::application::usecases::apply_template::{ApplyTemplateUseCase, context::ExecutionContext};
use crate::domain::mapping::{MappingRules, resolve_template};

/// mapping 파싱, 디렉터리 스냅샷, 규칙 매칭과 존재 검증을 수행한다.
pub(super) fn resolve_template_filename(
    use_case: &ApplyTemplateUseCase<'_>,
    ctx: &ExecutionContext,
) -> Result<String> {
    let settings = &ctx.settings;
    let rules = MappingRules::parse_optional(settings.mapping.as_deref())?;
    let templates = use_case.template_store.list(&settings.template_dir)?;

    let filename = resolve_template(
        &rules,
        &ctx.target.head_ref,
        &templates,
        &settings.default_template,
    )?;

    debug!(branch = %ctx.target.head_ref, template = %filename, "resolved template");
    Ok(filename)
}
