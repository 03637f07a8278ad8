//! `heroku logs`: recent log output, and `heroku logs cron`.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::application::ports::LogOptions;
use crate::application::services::app_query;

/// Arguments for `heroku logs`.
#[derive(Args)]
pub struct LogsArgs {
    #[command(subcommand)]
    pub command: Option<LogsCommand>,

    /// Number of lines to show
    #[arg(short, long)]
    pub num: Option<u32>,

    /// Only show output from this process, e.g. web.1
    #[arg(short, long)]
    pub ps: Option<String>,

    /// Only show output from this source, e.g. app or heroku
    #[arg(short, long)]
    pub source: Option<String>,
}

#[derive(Subcommand)]
pub enum LogsCommand {
    /// Show the output of the last cron run
    Cron,
}

/// Run the logs command.
///
/// # Errors
///
/// Returns an error if no app can be resolved or the platform call fails.
pub async fn run(app: &AppContext, args: LogsArgs) -> Result<()> {
    let platform = app.platform()?;
    let git = app.git();
    let resolver = app.resolver(&git);
    let text = match args.command {
        Some(LogsCommand::Cron) => app_query::cron_logs(&platform, &resolver).await?,
        None => {
            let opts = LogOptions {
                num: args.num,
                ps: args.ps,
                source: args.source,
            };
            app_query::logs(&platform, &resolver, &opts).await?
        }
    };
    app.renderer().render_logs(&text)
}
