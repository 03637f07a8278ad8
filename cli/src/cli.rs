//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;

/// Manage apps on the hosting platform
#[derive(Parser)]
#[command(
    name = "heroku",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// App to act on (defaults to the app of the current git checkout)
    #[arg(short, long, global = true, value_name = "APP")]
    pub app: Option<String>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (any non-empty NO_COLOR also disables it)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Never prompt (also set by CI or HEROKU_YES)
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List your apps
    List,

    /// Show detailed app information
    Info(commands::info::InfoArgs),

    /// Create a new app
    Create(commands::create::CreateArgs),

    /// Rename the app
    Rename(commands::rename::RenameArgs),

    /// Open the app in a web browser
    Open,

    /// Show recent app logs
    Logs(commands::logs::LogsArgs),

    /// Permanently destroy an app
    Destroy(commands::destroy::DestroyArgs),

    /// Show or change CLI settings
    #[command(subcommand)]
    Settings(commands::settings::SettingsCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            app,
            json,
            quiet,
            no_color,
            yes,
            verbose: _,
            command,
        } = self;
        let ctx = AppContext::new(&AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags { yes, app },
        })?;

        match command {
            Command::List => commands::list::run(&ctx).await,
            Command::Info(args) => commands::info::run(&ctx, &args).await,
            Command::Create(args) => commands::create::run(&ctx, &args).await,
            Command::Rename(args) => commands::rename::run(&ctx, &args).await,
            Command::Open => commands::open::run(&ctx).await,
            Command::Logs(args) => commands::logs::run(&ctx, args).await,
            Command::Destroy(args) => commands::destroy::run(&ctx, &args).await,
            Command::Settings(cmd) => commands::settings::run(&ctx, cmd),
            Command::Version => commands::version::run(&ctx),
        }
    }
}
