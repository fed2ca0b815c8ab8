//! 트리거 이벤트와 PR 식별자.

/// 봇이 동작하는 유일한 이벤트 이름.
pub const PULL_REQUEST_EVENT: &str = "pull_request";

/// 트리거 가드: pull_request 이벤트인지 판정한다.
pub fn is_pull_request_event(event_name: &str) -> bool {
    event_name == PULL_REQUEST_EVENT
}

/// 이벤트 페이로드에서 추출한 PR 대상 정보.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestContext {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    /// PR head ref (브랜치 이름)
    pub head_ref: String,
}

impl PullRequestContext {
    pub fn slug(&self) -> String {
        format!("{}/{}#{}", self.owner, self.repo, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pull_request_event_passes_guard() {
        assert!(is_pull_request_event("pull_request"));
        assert!(!is_pull_request_event("push"));
        assert!(!is_pull_request_event("pull_request_target"));
        assert!(!is_pull_request_event("Pull_Request"));
    }

    #[test]
    fn slug_formats_owner_repo_number() {
        let ctx = PullRequestContext {
            owner: "acme".into(),
            repo: "widgets".into(),
            number: 42,
            head_ref: "feature/x".into(),
        };
        assert_eq!(ctx.slug(), "acme/widgets#42");
    }
}
