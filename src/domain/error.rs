//! 템플릿 해석 단계의 도메인 오류.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// 해석된 파일명이 템플릿 디렉터리에 없음
    #[error("Could not find template: {0}!")]
    NotFound(String),

    /// mapping 규칙 문법 오류
    #[error("malformed mapping rule '{rule}': {reason}")]
    MalformedMapping { rule: String, reason: &'static str },
}
