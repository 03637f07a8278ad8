//! Application context: unified state passed to every command handler.
//!
//! Built once per invocation from the global flags and the effective
//! configuration. Adapters (platform client, git, resolver) are created on
//! demand so commands that never touch the platform stay offline.

use anyhow::Result;

use crate::application::ports::{ConfigStore, GitRemotes};
use crate::domain::config::CliConfig;
use crate::infra::browser::SystemBrowser;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::{YamlConfigStore, with_env_overrides};
use crate::infra::confirm::PromptConfirmer;
use crate::infra::git::GitCli;
use crate::infra::platform::{API_KEY_ENV, HttpPlatformClient};
use crate::infra::resolver::ContextResolver;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip interactive prompts (also set by `CI` / `HEROKU_YES` env vars).
    pub yes: bool,
    /// App named with `--app`.
    pub app: Option<String>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Stored settings with environment overrides applied.
    pub config: CliConfig,
    /// Where settings are persisted.
    pub config_store: YamlConfigStore,
    /// When `true`, never prompt.
    ///
    /// Set when `--yes` / `-y` is passed, or when the `CI` or `HEROKU_YES`
    /// environment variables are present.
    pub non_interactive: bool,
    /// App named with `--app`, if any.
    pub app: Option<String>,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be read.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("HEROKU_YES").is_ok();
        let non_interactive = flags.behaviour.yes || ci_env;

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        let config_store = YamlConfigStore;
        let config = with_env_overrides(config_store.load()?);
        tracing::debug!(api_url = %config.platform.api_url, host = %config.platform.host, "effective platform");

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config,
            config_store,
            non_interactive,
            app: flags.behaviour.app.clone(),
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Progress reporter; silent in JSON mode.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output, !self.is_json())
    }

    /// Client for the configured platform API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn platform(&self) -> Result<HttpPlatformClient> {
        HttpPlatformClient::new(
            &self.config.platform.api_url,
            &self.config.platform.host,
            std::env::var(API_KEY_ENV).ok(),
        )
    }

    /// Git remotes of the working directory.
    #[must_use]
    pub fn git(&self) -> GitCli<TokioCommandRunner> {
        GitCli::new(TokioCommandRunner::default(), &self.config.platform.host)
    }

    /// Current-app resolver over `git`.
    #[must_use]
    pub fn resolver<'g, G: GitRemotes>(&self, git: &'g G) -> ContextResolver<'g, G> {
        ContextResolver::new(self.app.as_deref(), &self.config.defaults.remote, git)
    }

    /// Destroy confirmation honoring `--confirm` and non-interactive mode.
    #[must_use]
    pub fn confirmer(&self, confirm: Option<&str>) -> PromptConfirmer {
        PromptConfirmer::new(confirm.map(str::to_owned), self.non_interactive)
    }

    #[must_use]
    pub fn browser(&self) -> SystemBrowser<TokioCommandRunner> {
        SystemBrowser::new(TokioCommandRunner::default())
    }
}
