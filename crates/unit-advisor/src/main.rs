//! unit-agent CLI
//!
//! Runs a single conversion question through the reason-act loop against
//! an OpenAI-compatible endpoint and prints the session transcript.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_core::{LlmProvider, StopReason};
use agent_runtime::OpenAiProvider;
use unit_advisor::{query, DEFAULT_MAX_TURNS};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let question = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if question.is_empty() {
        eprintln!("usage: unit-agent <question>");
        eprintln!("example: unit-agent Convert 10 meters to feet");
        std::process::exit(2);
    }

    let provider: Arc<dyn LlmProvider> = Arc::new(OpenAiProvider::from_env()?);

    match provider.health_check().await {
        Ok(true) => tracing::info!("✓ model endpoint reachable"),
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ model endpoint not reachable - the query will likely fail");
        }
    }

    let outcome = query(provider, &question, DEFAULT_MAX_TURNS).await?;

    for message in outcome.messages() {
        println!("[{}] {}", message.role, message.content);
        println!();
    }

    if outcome.stop == StopReason::Exhausted {
        tracing::warn!(
            max_turns = DEFAULT_MAX_TURNS,
            "turn budget exhausted before a final answer"
        );
    }

    Ok(())
}
