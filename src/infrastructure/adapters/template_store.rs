//! 템플릿 저장소 포트 구현 어댑터.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::application::ports::TemplateStore;
use crate::infrastructure::templates;

/// 로컬 파일시스템 템플릿 디렉터리 어댑터.
pub struct FsTemplateStore;

impl TemplateStore for FsTemplateStore {
    fn list(&self, dir: &str) -> Result<BTreeSet<String>> {
        templates::list_templates(dir)
    }

    fn read(&self, dir: &str, filename: &str) -> Result<String> {
        templates::read_template(dir, filename)
    }
}
