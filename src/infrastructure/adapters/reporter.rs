//! 콘솔 리포터 포트 구현 어댑터.
//! 실패는 GitHub Actions 워크플로 명령(`::error::`) 형식으로 출력한다.

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터.
#[derive(Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        println!();
        println!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<12}: {}", key, value);
    }

    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        println!("::error::{}", escape_workflow_data(message));
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}

/// 워크플로 명령 데이터에서 `%`, CR, LF를 이스케이프한다.
fn escape_workflow_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
