//! 이슈 트래커(GitHub) API 연동 계층.

pub mod github;

pub use github::GitHubClient;
