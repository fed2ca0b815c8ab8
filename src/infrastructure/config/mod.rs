//! 사용자 설정(JSON 파일 + action 입력) 로딩/병합 모듈.
//! 여러 출처를 우선순위대로 병합하고, 실행 진단용 정보를 함께 제공한다.

mod inspection;
mod loader;

use anyhow::Result;

use crate::application::config::Config;
use crate::infrastructure::env::Environment;

pub use inspection::{ConfigInspection, EffectiveSettings};
pub use loader::{action_inputs, config_paths};

/// 병합된 최종 설정을 로딩한다.
pub fn load(env: &dyn Environment, overrides: &Config) -> Result<Config> {
    Ok(loader::load_merged_config(env, overrides)?.config)
}

/// 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
pub fn inspect_pretty_json(env: &dyn Environment, overrides: &Config) -> Result<String> {
    let loaded = loader::load_merged_config(env, overrides)?;
    Ok(serde_json::to_string_pretty(&ConfigInspection::from_loaded(loaded))?)
}
