//! # agent-runtime
//!
//! Runtime providers for the unit-agent system.
//!
//! ## Providers
//!
//! - **OpenAI-compatible** (default): any hosted API speaking the
//!   `/chat/completions` protocol
//!
//! ## Usage
//!
//! ```rust,ignore
//! use agent_runtime::OpenAiProvider;
//!
//! let provider = OpenAiProvider::from_env()?;
//! let agent = AgentBuilder::new()
//!     .provider(Arc::new(provider))
//!     .build()?;
//! ```

#[cfg(feature = "openai")]
pub mod openai;

#[cfg(feature = "openai")]
pub use openai::{OpenAiConfig, OpenAiProvider};

// Re-export core types for convenience
pub use agent_core::{
    Action, ActionRegistry, Agent, AgentError, Conversation, LlmProvider, Message, Result, Role,
};
