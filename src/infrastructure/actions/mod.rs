//! GitHub Actions 실행 환경 해석.
//! 이벤트 이름/페이로드 파일/`INPUT_*` 입력을 읽는다.

mod payload;

use std::fs;

use anyhow::{Context, Result};

use crate::domain::event::PullRequestContext;
use crate::infrastructure::env::Environment;

pub use payload::parse_pull_request;

pub const EVENT_NAME_VAR: &str = "GITHUB_EVENT_NAME";
pub const EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";

/// 트리거 이벤트 이름.
pub fn event_name(env: &dyn Environment) -> Option<String> {
    env.var(EVENT_NAME_VAR).filter(|v| !v.is_empty())
}

/// 이벤트 페이로드 파일을 읽어 PR 대상 정보를 만든다.
pub fn load_pull_request(env: &dyn Environment) -> Result<PullRequestContext> {
    let path = env
        .var(EVENT_PATH_VAR)
        .with_context(|| format!("{EVENT_PATH_VAR} is not set"))?;
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read event payload at {path}"))?;

    parse_pull_request(&raw, env.var(REPOSITORY_VAR).as_deref())
}

/// action 입력값(`INPUT_<NAME>`)을 읽는다. 공백만 있으면 없는 것으로 본다.
pub fn input(env: &dyn Environment, name: &str) -> Option<String> {
    let key = format!("INPUT_{}", name.replace(' ', "_").to_ascii_uppercase());
    env.var(&key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn input_uses_actions_naming_and_trims() {
        let env = env(&[
            ("INPUT_TEMPLATE_DIR", "  .github/templates/ \n"),
            ("INPUT_MAPPING", "   "),
        ]);

        assert_eq!(
            input(&env, "template_dir").as_deref(),
            Some(".github/templates/")
        );
        assert_eq!(input(&env, "mapping"), None);
        assert_eq!(input(&env, "default"), None);
    }

    #[test]
    fn empty_event_name_is_absent() {
        assert_eq!(event_name(&env(&[(EVENT_NAME_VAR, "")])), None);
        assert_eq!(
            event_name(&env(&[(EVENT_NAME_VAR, "pull_request")])).as_deref(),
            Some("pull_request")
        );
    }

    #[test]
    fn loads_payload_from_event_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("event.json");
        fs::write(
            &path,
            r#"{ "number": 3, "pull_request": { "number": 3, "head": { "ref": "feat/x" } } }"#,
        )
        .unwrap();

        let env = env(&[
            (EVENT_PATH_VAR, path.to_str().unwrap()),
            (REPOSITORY_VAR, "acme/widgets"),
        ]);
        let ctx = load_pull_request(&env).unwrap();

        assert_eq!(ctx.owner, "acme");
        assert_eq!(ctx.repo, "widgets");
        assert_eq!(ctx.number, 3);
        assert_eq!(ctx.head_ref, "feat/x");
    }

    #[test]
    fn missing_event_path_is_an_error() {
        let err = load_pull_request(&env(&[])).unwrap_err();
        assert!(err.to_string().contains(EVENT_PATH_VAR));
    }
}
