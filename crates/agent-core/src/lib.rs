//! # agent-core
//!
//! Minimal reason-act agent loop with a provider-agnostic LLM abstraction
//! and synchronous action dispatch.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Agent                                │
//! │  ┌───────────┐  ┌────────┐  ┌──────────┐  ┌──────────────┐  │
//! │  │ Reasoning │──│ Parser │──│  Action  │  │ LlmProvider  │  │
//! │  │   Loop    │  │        │  │ Registry │  │  (Strategy)  │  │
//! │  └───────────┘  └────────┘  └──────────┘  └──────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each turn sends the full conversation to the provider, scans the reply
//! for a single `Action: <name>: <argument>` line, dispatches it to a
//! registered handler, and feeds the result back as an `Observation:`
//! user message. A plain-text reply ends the session; running out of
//! turns returns the partial conversation without error.

pub mod action;
pub mod error;
pub mod message;
pub mod parser;
pub mod provider;
pub mod reasoning;

pub use action::{Action, ActionRegistry};
pub use error::{AgentError, Result};
pub use message::{Conversation, Message, Role};
pub use parser::{parse_action, ActionInvocation};
pub use provider::{Completion, GenerationOptions, LlmProvider, TokenUsage};
pub use reasoning::{Agent, AgentBuilder, AgentConfig, AgentOutcome, StopReason};
