//! Infrastructure layer
//! 외부 시스템(GitHub API/파일시스템/CI 환경변수)과 직접 통신하는 구현체 집합.

pub mod actions;
pub mod adapters;
pub mod config;
pub mod env;
pub mod templates;
pub mod vcs;
