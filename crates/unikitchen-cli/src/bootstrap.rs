//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. The reqwest-backed client is built here and handed
//! to handlers as `Arc<dyn RecipeApiPort>`, so handlers never see HTTP types.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use unikitchen_api::{ClientConfig, DefaultRecipeApiClient};
use unikitchen_core::{
    AuthToken, CallOptions, CancellationToken, RecipeApiPort, RecipeApiResult, guarded,
};

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Client settings after env and flag overrides.
    pub client: ClientConfig,
    /// Token for authenticated commands.
    pub token: Option<AuthToken>,
    /// Upper bound for each port call, including image fan-out.
    pub call_timeout: Option<Duration>,
}

impl CliConfig {
    /// Environment defaults overridden by command-line flags.
    ///
    /// Clap already folds `UNIKITCHEN_*` variables into the flags; reading
    /// the environment here as well keeps `ClientConfig::from_env` the single
    /// source of defaults.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut client = ClientConfig::from_env();
        if let Some(ref url) = cli.base_url {
            client = client.with_base_url(url.trim());
        }
        let call_timeout = cli.timeout.map(Duration::from_secs);
        if let Some(timeout) = call_timeout {
            client = client.with_timeout(timeout);
        }

        let token = cli
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(AuthToken::new);

        Self {
            client,
            token,
            call_timeout,
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The recipe service.
    pub api: Arc<dyn RecipeApiPort>,
    /// Token from `--token` / `UNIKITCHEN_TOKEN`.
    pub token: Option<AuthToken>,
    /// Limits applied to every call.
    pub call: CallOptions,
}

impl CliContext {
    /// Access the recipe service.
    pub fn api(&self) -> &dyn RecipeApiPort {
        self.api.as_ref()
    }

    /// The token, if one was given.
    pub const fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// The token, or an error telling the user how to get one.
    pub fn require_token(&self) -> Result<&AuthToken, CliError> {
        self.token.as_ref().ok_or(CliError::MissingToken)
    }

    /// Run a port call under the context's cancellation and timeout.
    pub async fn run<T, F>(&self, call: F) -> Result<T, CliError>
    where
        F: Future<Output = RecipeApiResult<T>>,
    {
        Ok(guarded(&self.call, call).await?)
    }
}

/// Bootstrap the CLI application.
///
/// Builds the HTTP client and installs a Ctrl-C handler that cancels the
/// in-flight call. An explicit `--timeout` also bounds each call as a whole.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    debug!(base_url = config.client.base_url(), "building recipe client");
    let client = DefaultRecipeApiClient::new(&config.client)?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received, cancelling");
            on_interrupt.cancel();
        }
    });

    Ok(bootstrap_with(
        Arc::new(client),
        config.token,
        CallOptions::new()
            .with_optional_timeout(config.call_timeout)
            .with_cancellation(cancel),
    ))
}

/// Bootstrap with a custom port (for testing).
pub fn bootstrap_with(
    api: Arc<dyn RecipeApiPort>,
    token: Option<AuthToken>,
    call: CallOptions,
) -> CliContext {
    CliContext { api, token, call }
}
