//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use crate::application::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    /// 병합된 원본 값(토큰 마스킹)
    pub config: Config,
    pub effective: EffectiveSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub api_base: String,
    pub bot_login: String,
    pub reminder: String,
    pub token_resolved: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = &loaded.config;
        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            config: config.redacted(),
            effective: EffectiveSettings {
                api_base: config.api_base().to_string(),
                bot_login: config.bot_login().to_string(),
                reminder: config.reminder().to_string(),
                token_resolved: config.token.is_some(),
            },
        }
    }
}
