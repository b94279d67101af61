//! Application state wiring the tutor service together.
//!
//! `TutorService` is generic over its history store and chat client;
//! AppState pins it to the concrete infra implementations.

use std::sync::Arc;

use tracing::{info, warn};

use somaleo_core::agent::prompt::CBC_SYSTEM_PROMPT;
use somaleo_core::agent::registry::AgentRegistry;
use somaleo_core::tutor::service::TutorService;
use somaleo_infra::history::InMemoryHistoryStore;
use somaleo_infra::llm::openrouter::OpenRouterClient;
use somaleo_types::config::TutorConfig;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteTutorService = TutorService<InMemoryHistoryStore, OpenRouterClient>;

/// Shared application state.
///
/// Used by both the terminal chat and the REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub tutor: Arc<ConcreteTutorService>,
    pub config: Arc<TutorConfig>,
}

impl AppState {
    /// Wire the service, reading the API key from the environment.
    ///
    /// A missing key is not fatal: the state is built without agents and
    /// every question fails with "AI agent not initialized".
    pub fn init(config: TutorConfig) -> Self {
        let client = match OpenRouterClient::from_env(&config.upstream) {
            Ok(client) => {
                info!(
                    model = %config.upstream.model,
                    base_url = %config.upstream.base_url,
                    "Upstream client ready"
                );
                Some(client)
            }
            Err(e) => {
                warn!(error = %e, "AI agent not initialized; questions will be rejected");
                None
            }
        };
        Self::new(config, client)
    }

    /// Wire the service around an already-built client, if any.
    pub fn new(config: TutorConfig, client: Option<OpenRouterClient>) -> Self {
        let agents =
            client.map(|client| AgentRegistry::new(Arc::new(client), CBC_SYSTEM_PROMPT));
        let tutor = TutorService::new(Arc::new(InMemoryHistoryStore::new()), agents);

        Self {
            tutor: Arc::new(tutor),
            config: Arc::new(config),
        }
    }
}
