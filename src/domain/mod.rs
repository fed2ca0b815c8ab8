//! Domain layer
//! PR 템플릿 선택/중복 방지 규칙을 외부 의존성 없이 표현한다.

pub mod comment;
pub mod error;
pub mod event;
pub mod mapping;
pub mod run;
