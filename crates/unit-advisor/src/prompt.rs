//! System prompt for the unit-conversion agent

use agent_core::ActionRegistry;

/// Reason-act loop instructions with a worked example
///
/// The example must use the exact `Action: <name>: <argument>` grammar the
/// parser recognizes; models copy what they are shown.
pub const UNIT_ADVISOR_PROMPT: &str = r#"You are a unit-conversion assistant. You run in a loop of Thought, Action, PAUSE, Observation.

Use Thought to reason about the conversion you have been asked for.
Use Action to run one of the actions available to you - then output PAUSE and stop.
Observation will be the result of running that action.

When you have the converted result, answer in plain text with no Action line.

## Example Session

Question: Convert 10 meters to feet

Thought: I should look up the conversion rate from meters to feet.
Action: model_memory: meters to feet
PAUSE

You will be called again with:

Observation: 3.28084

Thought: Now I apply the rate to the value.
Action: apply_conversion: 3.28084,10
PAUSE

You will be called again with:

Observation: 10.0 meters = 32.81 feet

You then answer:

10 meters is 32.81 feet."#;

/// Full system prompt: loop instructions plus the registry's action catalog
pub fn system_prompt(actions: &ActionRegistry) -> String {
    format!("{UNIT_ADVISOR_PROMPT}\n\n{}", actions.prompt_section())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn test_system_prompt_includes_grammar_and_actions() {
        let prompt = system_prompt(&registry());
        assert!(prompt.contains("Action: <name>: <argument>"));
        assert!(prompt.contains("### model_memory"));
        assert!(prompt.contains("### apply_conversion"));
    }
}
