//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::collections::BTreeSet;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::comment::IssueComment;
use crate::domain::event::PullRequestContext;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self, overrides: &Config) -> Result<Config>;
    fn inspect_pretty_json(&self, overrides: &Config) -> Result<String>;
}

/// CI 실행 환경(이벤트 이름/페이로드) 조회 포트.
pub trait EventSource: Send + Sync {
    /// 트리거 이벤트 이름. 실행 환경에 없으면 None.
    fn event_name(&self) -> Option<String>;
    /// 이벤트 페이로드에서 PR 대상 정보를 추출한다.
    fn pull_request(&self) -> Result<PullRequestContext>;
}

/// 템플릿 디렉터리 접근 포트.
pub trait TemplateStore: Send + Sync {
    /// 디렉터리 내 파일명 스냅샷
    fn list(&self, dir: &str) -> Result<BTreeSet<String>>;
    /// `<dir><filename>` 내용을 그대로 읽는다
    fn read(&self, dir: &str, filename: &str) -> Result<String>;
}

/// PR 하나에 묶인 이슈 트래커(GitHub) 연동 포트.
#[async_trait]
pub trait IssueTrackerGateway: Send + Sync {
    async fn list_comments(&self) -> Result<Vec<IssueComment>>;
    async fn update_pull_request_body(&self, body: &str) -> Result<()>;
    async fn create_comment(&self, body: &str) -> Result<IssueComment>;
}

/// 대상 PR/API 설정에 맞는 게이트웨이를 생성하는 팩토리 포트.
pub trait IssueTrackerFactory: Send + Sync {
    fn build(
        &self,
        target: &PullRequestContext,
        api_base: &str,
        token: String,
    ) -> Result<Box<dyn IssueTrackerGateway>>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    /// 실패가 아닌 안내 메시지
    fn info(&self, message: &str);
    /// 실행 실패 메시지
    fn error(&self, message: &str);
    fn raw(&self, line: &str);
}
