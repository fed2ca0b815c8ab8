//! 환경변수 조회 추상화.

use std::collections::HashMap;

pub trait Environment: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// 실제 프로세스 환경변수.
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
