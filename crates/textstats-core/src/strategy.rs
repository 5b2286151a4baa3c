//! Analysis strategies.
//!
//! A strategy turns text into an [`Analysis`]. Two implementations exist:
//! [`LocalStrategy`] always runs the deterministic analyzer, and
//! [`FallbackStrategy`] asks a remote model first and computes locally if
//! that attempt fails for any reason. Strategies never fail.

use tracing::{debug, warn};

use crate::analyze::analyze;
use crate::error::{Result, TextStatsError};
use crate::models::{Analysis, StrategyKind};
use crate::openai::OpenAiClient;
use crate::remote::{CompletionClient, RemoteAnalyzer, RemoteConfig};

/// Produces an [`Analysis`] for a block of text.
pub trait AnalysisStrategy: Send + Sync {
    fn analyze(&self, text: &str) -> Analysis;

    /// Strategy name for logging.
    fn name(&self) -> &'static str;
}

/// Deterministic local computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStrategy;

impl AnalysisStrategy for LocalStrategy {
    fn analyze(&self, text: &str) -> Analysis {
        Analysis::local(analyze(text))
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

/// Remote delegation with local fallback.
///
/// Makes exactly one remote attempt. On any error the result is computed
/// locally and tagged [`Method::LocalFallback`](crate::models::Method::LocalFallback)
/// with the error message as the reason.
pub struct FallbackStrategy<C> {
    remote: RemoteAnalyzer<C>,
}

impl<C: CompletionClient> FallbackStrategy<C> {
    pub fn new(client: C) -> Self {
        Self {
            remote: RemoteAnalyzer::new(client),
        }
    }
}

impl<C: CompletionClient> AnalysisStrategy for FallbackStrategy<C> {
    fn analyze(&self, text: &str) -> Analysis {
        match self.remote.analyze(text) {
            Ok(result) => {
                debug!(client = self.remote.client_name(), "Remote analysis succeeded");
                Analysis::remote(result)
            }
            Err(err) => {
                warn!(
                    client = self.remote.client_name(),
                    error = %err,
                    "Remote analysis failed, falling back to local computation"
                );
                Analysis::fallback(analyze(text), err.to_string())
            }
        }
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

/// Select a strategy.
///
/// - [`StrategyKind::Local`] ignores `remote`.
/// - [`StrategyKind::Remote`] requires `remote`.
/// - [`StrategyKind::Auto`] uses the remote model when `remote` is present,
///   and stays local if the HTTP client cannot be built.
pub fn build_strategy(
    kind: StrategyKind,
    remote: Option<RemoteConfig>,
) -> Result<Box<dyn AnalysisStrategy>> {
    select_strategy(kind, remote, OpenAiClient::new)
}

fn select_strategy<C, F>(
    kind: StrategyKind,
    remote: Option<RemoteConfig>,
    connect: F,
) -> Result<Box<dyn AnalysisStrategy>>
where
    C: CompletionClient + 'static,
    F: FnOnce(RemoteConfig) -> Result<C>,
{
    let strategy: Box<dyn AnalysisStrategy> = match (kind, remote) {
        (StrategyKind::Local, _) | (StrategyKind::Auto, None) => Box::new(LocalStrategy),
        (StrategyKind::Remote, None) => {
            return Err(TextStatsError::Config(
                "the remote strategy requires an API key".to_string(),
            ));
        }
        (StrategyKind::Remote, Some(config)) => {
            debug!(?config, "Using remote strategy");
            Box::new(FallbackStrategy::new(connect(config)?))
        }
        (StrategyKind::Auto, Some(config)) => {
            debug!(?config, "Using remote strategy");
            match connect(config) {
                Ok(client) => Box::new(FallbackStrategy::new(client)),
                Err(err) => {
                    warn!(error = %err, "Remote client unavailable, using local strategy");
                    Box::new(LocalStrategy)
                }
            }
        }
    };

    debug!(kind = %kind, strategy = strategy.name(), "Selected analysis strategy");
    Ok(strategy)
}
