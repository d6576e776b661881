//! Action System
//!
//! Actions are the agent's local capabilities. Each one is a synchronous
//! pure function of its string argument: handlers never fail, they encode
//! their own bad-input text into the returned observation so the reasoning
//! loop can continue with the error visible to the model.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AgentError, Result};

/// Action trait - implement to add new capabilities
pub trait Action: Send + Sync {
    /// Unique action identifier, matched against the `Action:` line
    fn name(&self) -> &str;

    /// Human-readable description (shown to the LLM in the system prompt)
    fn description(&self) -> &str;

    /// Execute with the raw argument text; the result becomes the next
    /// observation verbatim
    fn run(&self, argument: &str) -> String;
}

/// Registry for available actions
///
/// Static for the life of a session. Registration overwrites on name
/// collision so tests can swap in doubles.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new action, replacing any existing one with the same name
    pub fn register<A: Action + 'static>(&mut self, action: A) {
        self.register_arc(Arc::new(action));
    }

    /// Register a shared action
    pub fn register_arc(&mut self, action: Arc<dyn Action>) {
        self.actions.insert(action.name().to_string(), action);
    }

    /// Get an action by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions.get(name).cloned()
    }

    /// Resolve and invoke an action
    ///
    /// An unregistered name is fatal for the turn and propagates as
    /// [`AgentError::UnknownAction`]; a registered handler's output is
    /// returned verbatim.
    pub fn dispatch(&self, name: &str, argument: &str) -> Result<String> {
        let action = self
            .get(name)
            .ok_or_else(|| AgentError::UnknownAction(name.to_string()))?;

        Ok(action.run(argument))
    }

    /// Registered action names
    pub fn names(&self) -> Vec<&str> {
        self.actions.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered actions
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Generate the system prompt section describing available actions
    pub fn prompt_section(&self) -> String {
        let mut prompt = String::from("## Available Actions\n\n");
        prompt.push_str("Invoke an action with a single line in this exact form:\n\n");
        prompt.push_str("Action: <name>: <argument>\n\n");

        let mut names = self.names();
        names.sort_unstable();

        for name in names {
            if let Some(action) = self.get(name) {
                prompt.push_str(&format!("### {}\n", action.name()));
                prompt.push_str(&format!("{}\n\n", action.description()));
            }
        }

        prompt
    }
}
