//! 기존 코멘트와 봇 식별 정책.

/// GitHub Actions 기본 토큰으로 작성된 코멘트의 작성자 login.
pub const DEFAULT_BOT_LOGIN: &str = "github-actions[bot]";

/// 템플릿 적용 후 남기는 고정 안내 코멘트.
pub const DEFAULT_REMINDER: &str = "No olvidarse de completar la descripcion del pr!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueComment {
    pub id: String,
    pub author: String,
}

/// 봇 계정이 이미 코멘트를 남겼는지 검사한다.
pub fn has_comment_by(comments: &[IssueComment], login: &str) -> bool {
    comments.iter().any(|c| c.author == login)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: &str, author: &str) -> IssueComment {
        IssueComment {
            id: id.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn detects_bot_comment_among_others() {
        let comments = vec![comment("1", "octocat"), comment("2", DEFAULT_BOT_LOGIN)];
        assert!(has_comment_by(&comments, DEFAULT_BOT_LOGIN));
    }

    #[test]
    fn ignores_human_comments() {
        let comments = vec![comment("1", "octocat"), comment("2", "github-actions")];
        assert!(!has_comment_by(&comments, DEFAULT_BOT_LOGIN));
        assert!(!has_comment_by(&[], DEFAULT_BOT_LOGIN));
    }
}
