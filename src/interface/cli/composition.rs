//! 애플리케이션 조립(composition root) 모듈.

use crate::application::ports::Reporter;
use crate::application::usecases::apply_template::ApplyTemplateUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::infrastructure::adapters::{
    ActionsEventSource, ConsoleReporter, FsTemplateStore, GitHubTrackerFactory,
    JsonConfigRepository,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    event_source: ActionsEventSource,
    config_repo: JsonConfigRepository,
    template_store: FsTemplateStore,
    tracker_factory: GitHubTrackerFactory,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            event_source: ActionsEventSource,
            config_repo: JsonConfigRepository,
            template_store: FsTemplateStore,
            tracker_factory: GitHubTrackerFactory,
            reporter: ConsoleReporter,
        }
    }
}

impl AppComposition {
    pub fn reporter(&self) -> &dyn Reporter {
        &self.reporter
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 템플릿 적용 유스케이스를 생성한다.
    pub fn apply_template_usecase(&self) -> ApplyTemplateUseCase<'_> {
        ApplyTemplateUseCase {
            event_source: &self.event_source,
            config_repo: &self.config_repo,
            template_store: &self.template_store,
            tracker_factory: &self.tracker_factory,
            reporter: &self.reporter,
        }
    }
}
