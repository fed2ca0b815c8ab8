//! 이슈 트래커 게이트웨이 팩토리 포트 구현 어댑터.

use anyhow::Result;

use crate::application::ports::{IssueTrackerFactory, IssueTrackerGateway};
use crate::domain::event::PullRequestContext;
use crate::infrastructure::vcs::GitHubClient;

pub struct GitHubTrackerFactory;

impl IssueTrackerFactory for GitHubTrackerFactory {
    fn build(
        &self,
        target: &PullRequestContext,
        api_base: &str,
        token: String,
    ) -> Result<Box<dyn IssueTrackerGateway>> {
        Ok(Box::new(GitHubClient::new(target, api_base, token)))
    }
}
