//! GitHub REST API 연동 구현.

use anyhow::{Context, Result};
use async_trait::async_trait;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::application::ports::IssueTrackerGateway;
use crate::domain::comment::IssueComment;
use crate::domain::event::PullRequestContext;

/// 코멘트 목록 페이지 크기(GitHub 최대값).
const PER_PAGE: usize = 100;

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?');

pub struct GitHubClient {
    client: Client,
    api_base: String,
    owner: String,
    repo: String,
    number: u64,
    token: String,
}

impl GitHubClient {
    /// 대상 PR에 묶인 클라이언트를 생성한다.
    pub fn new(target: &PullRequestContext, api_base: &str, token: String) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            owner: target.owner.clone(),
            repo: target.repo.clone(),
            number: target.number,
            token,
        }
    }

    fn repo_endpoint(&self) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_base,
            utf8_percent_encode(&self.owner, PATH_SEGMENT),
            utf8_percent_encode(&self.repo, PATH_SEGMENT)
        )
    }

    fn pulls_endpoint(&self) -> String {
        format!("{}/pulls/{}", self.repo_endpoint(), self.number)
    }

    fn issue_comments_endpoint(&self) -> String {
        format!("{}/issues/{}/comments", self.repo_endpoint(), self.number)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        // 공통 헤더/인증 적용.
        self.client
            .request(method, url)
            .header("User-Agent", "prtemplate")
            .header("Accept", "application/vnd.github+json")
            .bearer_auth(&self.token)
    }
}

#[derive(Debug, Deserialize)]
struct IssueCommentResponse {
    id: u64,
    user: Option<UserResponse>,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    login: String,
}

impl From<IssueCommentResponse> for IssueComment {
    fn from(c: IssueCommentResponse) -> Self {
        IssueComment {
            id: c.id.to_string(),
            // 삭제된 계정(ghost)은 user가 null이다.
            author: c.user.map(|u| u.login).unwrap_or_default(),
        }
    }
}

/// 상태 코드 확인 후 본문을 문자열로 읽는다.
async fn read_success_body(resp: Response, action: &str) -> Result<String> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .with_context(|| format!("github: failed to read {action} body"))?;

    if !status.is_success() {
        anyhow::bail!("github: failed to {action} ({status}): {body}");
    }
    Ok(body)
}

#[async_trait]
impl IssueTrackerGateway for GitHubClient {
    async fn list_comments(&self) -> Result<Vec<IssueComment>> {
        let mut comments = Vec::new();

        for page in 1usize.. {
            let resp = self
                .request(Method::GET, self.issue_comments_endpoint())
                .query(&[("per_page", PER_PAGE), ("page", page)])
                .send()
                .await
                .context("github: failed to list comments")?;
            let body = read_success_body(resp, "list comments").await?;

            let batch: Vec<IssueCommentResponse> =
                serde_json::from_str(&body).context("github: invalid comments JSON")?;
            let last_page = batch.len() < PER_PAGE;
            comments.extend(batch.into_iter().map(IssueComment::from));

            debug!(page, total = comments.len(), "listed issue comments");
            if last_page {
                break;
            }
        }

        Ok(comments)
    }

    async fn update_pull_request_body(&self, body: &str) -> Result<()> {
        let resp = self
            .request(Method::PATCH, self.pulls_endpoint())
            .json(&json!({ "body": body }))
            .send()
            .await
            .context("github: failed to update pull request")?;

        read_success_body(resp, "update pull request").await?;
        Ok(())
    }

    async fn create_comment(&self, body: &str) -> Result<IssueComment> {
        let resp = self
            .request(Method::POST, self.issue_comments_endpoint())
            .json(&json!({ "body": body }))
            .send()
            .await
            .context("github: failed to create comment")?;

        let response_body = read_success_body(resp, "create comment").await?;
        let comment: IssueCommentResponse = serde_json::from_str(&response_body)
            .context("github: invalid create-comment JSON")?;
        Ok(comment.into())
    }
}
