//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::comment::{DEFAULT_BOT_LOGIN, DEFAULT_REMINDER};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

const REDACTED: &str = "***";

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// 브랜치 prefix → 템플릿 매핑 (`name=pfx,pfx;name=pfx`)
    pub mapping: Option<String>,
    /// 템플릿 디렉터리 (구분자로 끝나는 경로를 기대)
    pub template_dir: Option<String>,
    /// 일치하는 규칙이 없을 때 쓰는 템플릿 이름(확장자 제외)
    #[serde(rename = "default")]
    pub default_template: Option<String>,
    /// GitHub API 토큰
    pub token: Option<String>,
    /// API base URL override(선택)
    pub api_base: Option<String>,
    /// 중복 판정에 쓰는 봇 login
    pub bot_login: Option<String>,
    /// 템플릿 적용 후 남길 안내 코멘트
    pub reminder: Option<String>,
}

/// 검증이 끝난 실행 설정.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mapping: Option<String>,
    pub template_dir: String,
    pub default_template: String,
    pub token: Option<String>,
    pub api_base: String,
    pub bot_login: String,
    pub reminder: String,
}

impl Config {
    /// 후순위 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        if other.mapping.is_some() {
            self.mapping = other.mapping;
        }
        if other.template_dir.is_some() {
            self.template_dir = other.template_dir;
        }
        if other.default_template.is_some() {
            self.default_template = other.default_template;
        }
        if other.token.is_some() {
            self.token = other.token;
        }
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
        if other.bot_login.is_some() {
            self.bot_login = other.bot_login;
        }
        if other.reminder.is_some() {
            self.reminder = other.reminder;
        }
    }

    /// 진단 출력용 사본(토큰 마스킹).
    pub fn redacted(&self) -> Config {
        Config {
            token: self.token.as_ref().map(|_| REDACTED.to_string()),
            ..self.clone()
        }
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn bot_login(&self) -> &str {
        self.bot_login.as_deref().unwrap_or(DEFAULT_BOT_LOGIN)
    }

    pub fn reminder(&self) -> &str {
        self.reminder.as_deref().unwrap_or(DEFAULT_REMINDER)
    }

    /// 필수 입력을 검증해 실행 설정으로 변환한다.
    /// dry-run이 아니면 토큰이 반드시 있어야 한다.
    pub fn settings(&self, require_token: bool) -> Result<Settings> {
        let Some(template_dir) = non_blank(self.template_dir.as_deref()) else {
            bail!("missing required input: template_dir");
        };
        let Some(default_template) = non_blank(self.default_template.as_deref()) else {
            bail!("missing required input: default");
        };

        let token = non_blank(self.token.as_deref()).map(ToString::to_string);
        if require_token && token.is_none() {
            bail!("missing required input: token (or set GITHUB_TOKEN, or use --dry-run)");
        }

        let api_base = self.api_base().trim_end_matches('/').to_string();
        Url::parse(&api_base).with_context(|| format!("invalid api_base URL: {api_base}"))?;

        Ok(Settings {
            mapping: non_blank(self.mapping.as_deref()).map(ToString::to_string),
            template_dir: template_dir.to_string(),
            default_template: default_template.to_string(),
            token,
            api_base,
            bot_login: self.bot_login().to_string(),
            reminder: self.reminder().to_string(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            template_dir: Some(".github/templates/".into()),
            default_template: Some("default".into()),
            token: Some("ghs_abc".into()),
            ..Config::default()
        }
    }

    #[test]
    fn later_values_win_and_missing_values_keep_earlier() {
        let mut cfg = base();
        cfg.merge_from(Config {
            mapping: Some("A=foo".into()),
            default_template: Some("other".into()),
            ..Config::default()
        });

        assert_eq!(cfg.mapping.as_deref(), Some("A=foo"));
        assert_eq!(cfg.default_template.as_deref(), Some("other"));
        assert_eq!(cfg.template_dir.as_deref(), Some(".github/templates/"));
        assert_eq!(cfg.token.as_deref(), Some("ghs_abc"));
    }

    #[test]
    fn settings_apply_documented_defaults() {
        let settings = base().settings(true).unwrap();
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.bot_login, "github-actions[bot]");
        assert_eq!(settings.reminder, DEFAULT_REMINDER);
        assert_eq!(settings.mapping, None);
    }

    #[test]
    fn settings_require_template_dir_and_default() {
        let mut cfg = base();
        cfg.template_dir = None;
        let err = cfg.settings(true).unwrap_err();
        assert!(err.to_string().contains("template_dir"));

        let mut cfg = base();
        cfg.default_template = Some("  ".into());
        let err = cfg.settings(true).unwrap_err();
        assert!(err.to_string().contains("default"));
    }

    #[test]
    fn token_is_optional_only_for_dry_run() {
        let mut cfg = base();
        cfg.token = None;
        assert!(cfg.settings(true).is_err());
        assert_eq!(cfg.settings(false).unwrap().token, None);
    }

    #[test]
    fn api_base_is_validated_and_trimmed() {
        let mut cfg = base();
        cfg.api_base = Some("https://ghe.example.com/api/v3/".into());
        assert_eq!(
            cfg.settings(true).unwrap().api_base,
            "https://ghe.example.com/api/v3"
        );

        cfg.api_base = Some("not a url".into());
        assert!(cfg.settings(true).is_err());
    }

    #[test]
    fn redacted_masks_token_only() {
        let redacted = base().redacted();
        assert_eq!(redacted.token.as_deref(), Some("***"));
        assert_eq!(redacted.template_dir.as_deref(), Some(".github/templates/"));
        assert_eq!(Config::default().redacted().token, None);
    }

    #[test]
    fn json_uses_default_key_for_fallback_template() {
        let cfg: Config =
            serde_json::from_str(r#"{ "default": "plain", "template_dir": "t/" }"#).unwrap();
        assert_eq!(cfg.default_template.as_deref(), Some("plain"));
    }
}
