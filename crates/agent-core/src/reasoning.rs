//! Reasoning Loop
//!
//! Implements the reason-act pattern: the model thinks in free text,
//! requests actions through `Action:` directives, and receives each
//! handler's output back as an `Observation:` user turn until it answers
//! in plain text or the turn budget runs out.

use std::sync::Arc;

use crate::action::ActionRegistry;
use crate::error::Result;
use crate::message::{Conversation, Message, Role};
use crate::parser::parse_action;
use crate::provider::{GenerationOptions, LlmProvider};

/// Agent configuration
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// System prompt template
    pub system_prompt: String,

    /// Maximum loop turns (and therefore provider calls) per query
    pub max_turns: usize,

    /// Generation options
    pub generation: GenerationOptions,

    /// Whether to append the action catalog to the system prompt
    pub inject_action_catalog: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            max_turns: 5,
            generation: GenerationOptions::default(),
            inject_action_catalog: true,
        }
    }
}

const DEFAULT_SYSTEM_PROMPT: &str = r#"You run in a loop of Thought, Action, PAUSE, Observation.

Use Thought to reason about the question you have been asked.
Use Action to run one of the actions available to you, then output PAUSE
and stop. Observation will be the result of running that action.
When you have enough information, answer in plain text with no Action line."#;

/// How a query session ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The model produced a final answer (no action directive)
    Answered,
    /// The turn budget ran out; the conversation is returned as-is
    Exhausted,
}

/// A finished query session
#[derive(Clone, Debug)]
pub struct AgentOutcome {
    /// Full conversation accumulated during the session
    pub conversation: Conversation,

    /// Why the loop stopped
    pub stop: StopReason,
}

impl AgentOutcome {
    /// Ordered message log of the session
    pub fn messages(&self) -> &[Message] {
        self.conversation.history()
    }

    /// The final assistant message, when the session answered
    pub fn final_answer(&self) -> Option<&str> {
        match self.stop {
            StopReason::Answered => self
                .conversation
                .last()
                .filter(|m| m.role == Role::Assistant)
                .map(|m| m.content.as_str()),
            StopReason::Exhausted => None,
        }
    }
}

/// The main Agent struct
pub struct Agent {
    provider: Arc<dyn LlmProvider>,
    actions: Arc<ActionRegistry>,
    config: AgentConfig,
}

impl Agent {
    /// Create a new agent
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        actions: Arc<ActionRegistry>,
        config: AgentConfig,
    ) -> Self {
        Self {
            provider,
            actions,
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(provider: Arc<dyn LlmProvider>, actions: Arc<ActionRegistry>) -> Self {
        Self::new(provider, actions, AgentConfig::default())
    }

    /// Build the full system prompt including the action catalog
    fn build_system_prompt(&self) -> String {
        let mut prompt = self.config.system_prompt.clone();

        if self.config.inject_action_catalog && !self.actions.is_empty() {
            prompt.push_str("\n\n");
            prompt.push_str(&self.actions.prompt_section());
        }

        prompt
    }

    /// Run one query session to completion
    ///
    /// Issues at most `max_turns` provider calls, strictly one at a time.
    /// An unknown action name aborts the session; exhausting the budget
    /// does not, it returns the partial conversation silently.
    pub async fn query(&self, question: &str) -> Result<AgentOutcome> {
        let mut conversation = Conversation::with_system_prompt(self.build_system_prompt());
        let mut next_input = question.to_string();

        for turn in 1..=self.config.max_turns {
            conversation.push(Message::user(&next_input));

            let completion = self
                .provider
                .complete(conversation.history(), &self.config.generation)
                .await?;

            conversation.push(Message::assistant(&completion.content));

            let Some(invocation) = parse_action(&completion.content) else {
                tracing::debug!(turn, "model produced a final answer");
                return Ok(AgentOutcome {
                    conversation,
                    stop: StopReason::Answered,
                });
            };

            tracing::debug!(turn, action = %invocation.name, "dispatching action");

            let observation = self
                .actions
                .dispatch(&invocation.name, &invocation.argument)?;

            next_input = format!("Observation: {observation}");
        }

        tracing::debug!(max_turns = self.config.max_turns, "turn budget exhausted");

        Ok(AgentOutcome {
            conversation,
            stop: StopReason::Exhausted,
        })
    }

    /// Get the action registry
    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    /// Get configuration
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

/// Builder for Agent configuration
pub struct AgentBuilder {
    provider: Option<Arc<dyn LlmProvider>>,
    actions: ActionRegistry,
    config: AgentConfig,
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            provider: None,
            actions: ActionRegistry::new(),
            config: AgentConfig::default(),
        }
    }

    pub fn provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn action<A: crate::action::Action + 'static>(mut self, action: A) -> Self {
        self.actions.register(action);
        self
    }

    pub fn actions(mut self, actions: ActionRegistry) -> Self {
        self.actions = actions;
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = prompt.into();
        self
    }

    pub fn max_turns(mut self, max_turns: usize) -> Self {
        self.config.max_turns = max_turns;
        self
    }

    pub fn generation(mut self, generation: GenerationOptions) -> Self {
        self.config.generation = generation;
        self
    }

    pub fn inject_action_catalog(mut self, inject: bool) -> Self {
        self.config.inject_action_catalog = inject;
        self
    }

    pub fn build(self) -> Result<Agent> {
        let provider = self
            .provider
            .ok_or_else(|| crate::error::AgentError::Config("no provider configured".into()))?;

        Ok(Agent::new(provider, Arc::new(self.actions), self.config))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::action::Action;
    use crate::error::AgentError;
    use crate::provider::Completion;

    /// Provider that replays canned responses in order, repeating the last
    /// one if called again, and counts its calls.
    struct ScriptedProvider {
        responses: Vec<String>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(responses: &[&str]) -> Self {
            Self {
                responses: responses.iter().map(ToString::to_string).collect(),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn complete(
            &self,
            _messages: &[Message],
            options: &GenerationOptions,
        ) -> Result<Completion> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let content = self
                .responses
                .get(call.min(self.responses.len() - 1))
                .cloned()
                .unwrap_or_default();

            Ok(Completion {
                content,
                model: options.model.clone(),
                usage: None,
            })
        }
    }

    struct EchoAction;

    impl Action for EchoAction {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Returns its argument unchanged."
        }

        fn run(&self, argument: &str) -> String {
            argument.to_string()
        }
    }

    fn agent(provider: Arc<ScriptedProvider>, max_turns: usize) -> Agent {
        AgentBuilder::new()
            .provider(provider)
            .action(EchoAction)
            .max_turns(max_turns)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn plain_text_response_answers_immediately() {
        let provider = Arc::new(ScriptedProvider::new(&["Paris is the capital of France."]));
        let outcome = agent(provider.clone(), 5).query("Capital of France?").await.unwrap();

        assert_eq!(outcome.stop, StopReason::Answered);
        assert_eq!(outcome.final_answer(), Some("Paris is the capital of France."));
        assert_eq!(provider.call_count(), 1);
        // system prompt, question, answer
        assert_eq!(outcome.messages().len(), 3);
    }

    #[tokio::test]
    async fn dispatched_action_feeds_back_as_observation() {
        let provider = Arc::new(ScriptedProvider::new(&[
            "Thought: let me check.\nAction: echo: ping\nPAUSE",
            "The echo said ping.",
        ]));
        let outcome = agent(provider.clone(), 5).query("Say ping.").await.unwrap();

        assert_eq!(outcome.stop, StopReason::Answered);
        assert_eq!(provider.call_count(), 2);

        let observation = &outcome.messages()[3];
        assert_eq!(observation.role, Role::User);
        assert_eq!(observation.content, "Observation: ping");
    }

    #[tokio::test]
    async fn unknown_action_aborts_the_session() {
        let provider = Arc::new(ScriptedProvider::new(&[
            "Action: fetch_weather: Paris\nPAUSE",
        ]));
        let err = agent(provider, 5).query("Weather?").await.unwrap_err();

        assert!(matches!(err, AgentError::UnknownAction(name) if name == "fetch_weather"));
    }

    #[tokio::test]
    async fn turn_budget_exhaustion_is_silent() {
        // The model never stops asking for actions.
        let provider = Arc::new(ScriptedProvider::new(&["Action: echo: again\nPAUSE"]));
        let outcome = agent(provider.clone(), 3).query("Loop forever.").await.unwrap();

        assert_eq!(outcome.stop, StopReason::Exhausted);
        assert_eq!(outcome.final_answer(), None);
        // at most max_turns provider calls
        assert_eq!(provider.call_count(), 3);
        // system prompt plus one user/assistant pair per turn
        assert_eq!(outcome.messages().len(), 7);
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        struct DownProvider;

        #[async_trait]
        impl LlmProvider for DownProvider {
            async fn complete(
                &self,
                _messages: &[Message],
                _options: &GenerationOptions,
            ) -> Result<Completion> {
                Err(AgentError::ModelUnavailable("connection refused".into()))
            }
        }

        let agent = AgentBuilder::new()
            .provider(Arc::new(DownProvider))
            .build()
            .unwrap();

        let err = agent.query("Anything.").await.unwrap_err();
        assert!(matches!(err, AgentError::ModelUnavailable(_)));
    }

    #[test]
    fn builder_requires_a_provider() {
        let err = AgentBuilder::new().build().err().unwrap();
        assert!(matches!(err, AgentError::Config(_)));
    }
}
