//! CLI 명령 파싱 모듈.

use clap::{Args, Parser, Subcommand};

use crate::application::config::Config;
use crate::application::usecases::apply_template::RunOptions;

#[derive(Debug, Parser)]
#[command(name = "prtemplate")]
#[command(about = "Fill pull request descriptions from branch-specific markdown templates")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    inputs: InputArgs,

    /// Resolve and print the template, do not call the GitHub API
    #[arg(long)]
    dry_run: bool,
}

/// action 입력을 덮어쓰는 플래그들.
#[derive(Debug, Args)]
struct InputArgs {
    /// Prefix mapping rules, e.g. "feature=feat/,feature/;bugfix=fix/"
    #[arg(long)]
    mapping: Option<String>,

    /// Directory holding the templates (keep the trailing separator)
    #[arg(long)]
    template_dir: Option<String>,

    /// Template name used when no rule matches
    #[arg(long = "default")]
    default_template: Option<String>,

    /// GitHub API token
    #[arg(long)]
    token: Option<String>,

    /// GitHub API base URL
    #[arg(long)]
    api_base: Option<String>,

    /// Login whose comments mark a PR as already handled
    #[arg(long)]
    bot_login: Option<String>,

    /// Comment posted after the description is replaced
    #[arg(long)]
    reminder: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config (token redacted)
    Config,
}

pub enum CliAction {
    InspectConfig(Config),
    Run(RunOptions),
}

impl From<InputArgs> for Config {
    fn from(args: InputArgs) -> Self {
        Config {
            mapping: args.mapping,
            template_dir: args.template_dir,
            default_template: args.default_template,
            token: args.token,
            api_base: args.api_base,
            bot_login: args.bot_login,
            reminder: args.reminder,
        }
    }
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, clap::Error> {
        Cli::try_parse().map(Cli::into_action)
    }

    fn into_action(self) -> CliAction {
        let overrides = Config::from(self.inputs);
        match self.command {
            Some(Commands::Config) => CliAction::InspectConfig(overrides),
            None => CliAction::Run(RunOptions {
                dry_run: self.dry_run,
                overrides,
            }),
        }
    }
}
