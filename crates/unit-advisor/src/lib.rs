//! # unit-advisor
//!
//! Unit-conversion reason-act agent built on `agent-core`.
//!
//! The agent answers questions like "Convert 10 meters to feet" by looping
//! between the model and two local actions:
//!
//! - `model_memory` recalls a conversion rate by name
//! - `apply_conversion` applies a rate (or `multiplier,offset` pair) to a
//!   value and formats the result
//!
//! The single entry point is [`query`]; the caller owns the provider
//! handle and the returned conversation is the whole session transcript.

pub mod actions;
pub mod prompt;

use std::sync::Arc;

use agent_core::{ActionRegistry, AgentBuilder, AgentOutcome, LlmProvider, Result};

pub use actions::{ApplyConversionAction, ModelMemoryAction};
pub use prompt::UNIT_ADVISOR_PROMPT;

/// Default turn budget per query
pub const DEFAULT_MAX_TURNS: usize = 5;

/// Build the registry with both conversion actions
pub fn registry() -> ActionRegistry {
    let mut actions = ActionRegistry::new();
    actions.register(ModelMemoryAction);
    actions.register(ApplyConversionAction);
    actions
}

/// Run one conversion question through the agent loop
///
/// Returns the full ordered transcript. Unknown actions and provider
/// failures abort the query; running out of turns does not.
pub async fn query(
    provider: Arc<dyn LlmProvider>,
    question: &str,
    max_turns: usize,
) -> Result<AgentOutcome> {
    let agent = AgentBuilder::new()
        .provider(provider)
        .actions(registry())
        .system_prompt(UNIT_ADVISOR_PROMPT)
        .max_turns(max_turns)
        .build()?;

    agent.query(question).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_both_actions() {
        let actions = registry();
        assert_eq!(actions.len(), 2);
        assert!(actions.get("model_memory").is_some());
        assert!(actions.get("apply_conversion").is_some());
    }
}
