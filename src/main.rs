//! `prtemplate` 바이너리 진입점.

use prtemplate::interface::cli::{AppComposition, Cli, CliAction};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        // usage 오류는 2, --help/--version은 0으로 종료한다.
        Err(err) => err.exit(),
    };

    let composition = AppComposition::default();

    match action {
        CliAction::InspectConfig(overrides) => {
            match composition.inspect_config_usecase().execute(&overrides) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    composition.reporter().error(&format!("{err:#}"));
                    std::process::exit(1);
                }
            }
        }
        CliAction::Run(options) => {
            if let Err(err) = composition.apply_template_usecase().execute(options).await {
                composition.reporter().error(&format!("{err:#}"));
                std::process::exit(1);
            }
        }
    }
}
