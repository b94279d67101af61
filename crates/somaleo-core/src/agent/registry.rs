//! Per-session agent registry.
//!
//! Each session id gets its own [`Agent`], so one learner's turns never
//! appear in another's model context and sessions do not wait on each
//! other's upstream calls. All agents share one client.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::llm::client::ChatClient;

use super::conversation::Agent;

pub struct AgentRegistry<C: ChatClient> {
    client: Arc<C>,
    system_prompt: String,
    agents: DashMap<String, Arc<Agent<C>>>,
}

impl<C: ChatClient> AgentRegistry<C> {
    pub fn new(client: Arc<C>, system_prompt: impl Into<String>) -> Self {
        Self {
            client,
            system_prompt: system_prompt.into(),
            agents: DashMap::new(),
        }
    }

    /// The agent for `session_id`, created on first use.
    pub fn agent_for(&self, session_id: &str) -> Arc<Agent<C>> {
        if let Some(agent) = self.agents.get(session_id) {
            return Arc::clone(agent.value());
        }

        let entry = self
            .agents
            .entry(session_id.to_string())
            .or_insert_with(|| {
                debug!(session_id, "Creating agent for session");
                Arc::new(Agent::new(self.client.clone(), self.system_prompt.as_str()))
            });
        Arc::clone(entry.value())
    }

    /// Number of sessions with an agent.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
