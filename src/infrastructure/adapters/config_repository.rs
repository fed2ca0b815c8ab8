//! 설정 저장소 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::ConfigRepository;
use crate::infrastructure::config;
use crate::infrastructure::env::ProcessEnv;

/// JSON 파일 + action 입력 기반 설정 저장소 어댑터.
pub struct JsonConfigRepository;

impl ConfigRepository for JsonConfigRepository {
    fn load(&self, overrides: &Config) -> Result<Config> {
        config::load(&ProcessEnv, overrides)
    }

    fn inspect_pretty_json(&self, overrides: &Config) -> Result<String> {
        config::inspect_pretty_json(&ProcessEnv, overrides)
    }
}
