//! 템플릿 디렉터리 조회/읽기.

use std::collections::BTreeSet;
use std::fs;

use anyhow::{Context, Result};

/// 디렉터리에 있는 파일명 목록(하위 디렉터리 이름 포함, 재귀 없음).
pub fn list_templates(dir: &str) -> Result<BTreeSet<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read template directory {dir}"))?;

    let mut names = BTreeSet::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read entry in {dir}"))?;
        names.insert(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// `<dir><filename>`을 UTF-8 텍스트로 읽는다. 경로 구분자는 보정하지 않는다.
pub fn read_template(dir: &str, filename: &str) -> Result<String> {
    let path = format!("{dir}{filename}");
    fs::read_to_string(&path).with_context(|| format!("failed to read template {path}"))
}
