//! 설정 파일 탐색/병합 로더.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::config::Config;
use crate::infrastructure::actions::input;
use crate::infrastructure::env::Environment;

pub const CONFIG_ENV_VAR: &str = "PRTEMPLATE_CONFIG";
const TOKEN_FALLBACK_VAR: &str = "GITHUB_TOKEN";
const API_URL_FALLBACK_VAR: &str = "GITHUB_API_URL";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

pub(crate) fn load_merged_config(env: &dyn Environment, overrides: &Config) -> Result<LoadedConfig> {
    load_from_paths(config_paths(env), env, overrides)
}

/// 파일 → action 입력 → CLI 순으로 병합한 뒤 GitHub 기본 환경변수로 빈 값을 채운다.
pub(crate) fn load_from_paths(
    paths: Vec<PathBuf>,
    env: &dyn Environment,
    overrides: &Config,
) -> Result<LoadedConfig> {
    // 낮은 우선순위에서 높은 우선순위 순서로 병합한다.
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
        debug!(path = %path.display(), "loaded config file");
    }

    merged.merge_from(action_inputs(env));
    merged.merge_from(overrides.clone());

    if merged.token.is_none() {
        merged.token = env.var(TOKEN_FALLBACK_VAR).filter(|v| !v.is_empty());
    }
    if merged.api_base.is_none() {
        merged.api_base = env.var(API_URL_FALLBACK_VAR).filter(|v| !v.is_empty());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// action.yml 입력(`INPUT_*`)을 설정으로 변환한다.
pub fn action_inputs(env: &dyn Environment) -> Config {
    Config {
        mapping: input(env, "mapping"),
        template_dir: input(env, "template_dir"),
        default_template: input(env, "default"),
        token: input(env, "token"),
        api_base: input(env, "api_base"),
        bot_login: input(env, "bot_login"),
        reminder: input(env, "reminder"),
    }
}

/// 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths(env: &dyn Environment) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("prtemplate").join("config.json"));
    }

    paths.push(PathBuf::from(".prtemplate/config.json"));

    if let Some(path) = env.var(CONFIG_ENV_VAR) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = Vec::new();
    for path in paths {
        if !out.contains(&path) {
            out.push(path);
        }
    }
    out
}
