//! pull_request 이벤트 페이로드(JSON) 스키마.

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::domain::event::PullRequestContext;

#[derive(Debug, Deserialize)]
struct EventPayload {
    number: Option<u64>,
    issue: Option<NumberedPayload>,
    pull_request: Option<PullRequestPayload>,
    repository: Option<RepositoryPayload>,
}

#[derive(Debug, Deserialize)]
struct NumberedPayload {
    number: u64,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: Option<u64>,
    head: HeadPayload,
}

#[derive(Debug, Deserialize)]
struct HeadPayload {
    #[serde(rename = "ref")]
    git_ref: String,
}

#[derive(Debug, Deserialize)]
struct RepositoryPayload {
    name: String,
    owner: OwnerPayload,
}

#[derive(Debug, Deserialize)]
struct OwnerPayload {
    login: String,
}

/// 페이로드 JSON과 `GITHUB_REPOSITORY` 값으로 PR 대상 정보를 만든다.
/// 번호는 issue → pull_request → 최상위 number 순으로 찾는다.
pub fn parse_pull_request(raw: &str, repository: Option<&str>) -> Result<PullRequestContext> {
    let payload: EventPayload =
        serde_json::from_str(raw).context("invalid event payload JSON")?;

    let Some(pull_request) = payload.pull_request else {
        bail!("event payload has no pull_request object");
    };

    let number = payload
        .issue
        .map(|i| i.number)
        .or(pull_request.number)
        .or(payload.number)
        .context("event payload has no pull request number")?;

    let (owner, repo) = match payload.repository {
        Some(repository) => (repository.owner.login, repository.name),
        None => split_repository(repository)?,
    };

    Ok(PullRequestContext {
        owner,
        repo,
        number,
        head_ref: pull_request.head.git_ref,
    })
}

fn split_repository(repository: Option<&str>) -> Result<(String, String)> {
    let Some(value) = repository else {
        bail!("repository is unknown: payload has no repository and GITHUB_REPOSITORY is not set");
    };
    match value.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => bail!("GITHUB_REPOSITORY must look like owner/repo, got '{value}'"),
    }
}
