//! 이벤트 소스 포트 구현 어댑터.

use anyhow::Result;

use crate::application::ports::EventSource;
use crate::domain::event::PullRequestContext;
use crate::infrastructure::actions;
use crate::infrastructure::env::ProcessEnv;

/// GitHub Actions 환경변수에서 이벤트를 읽는 어댑터.
pub struct ActionsEventSource;

impl EventSource for ActionsEventSource {
    fn event_name(&self) -> Option<String> {
        actions::event_name(&ProcessEnv)
    }

    fn pull_request(&self) -> Result<PullRequestContext> {
        actions::load_pull_request(&ProcessEnv)
    }
}
