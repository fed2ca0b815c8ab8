//! 실행 결과.

/// 실패가 아닌 실행 종료 상태.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// pull_request 이외 이벤트라 아무것도 하지 않음
    NotApplicableEvent { event_name: String },
    /// 봇 코멘트가 이미 존재해 건너뜀
    AlreadyCommented,
    /// PR 본문 갱신 + 안내 코멘트 작성 완료
    Published { filename: String },
    /// dry-run: 해석만 수행
    DryRun { filename: String },
}
