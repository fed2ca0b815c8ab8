//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod event_source;
mod reporter;
mod template_store;
mod tracker_factory;

pub use config_repository::JsonConfigRepository;
pub use event_source::ActionsEventSource;
pub use reporter::ConsoleReporter;
pub use template_store::FsTemplateStore;
pub use tracker_factory::GitHubTrackerFactory;
