//! `finsight chat`

use crate::app::AppConfig;
use anyhow::{Context, Result};
use finsight_llm::{create_provider, ChatMessage};

pub async fn run(config: &AppConfig, system: Option<&str>, prompt: &str) -> Result<()> {
    let provider = create_provider(config.llm.provider_config()?)
        .context("Failed to create LLM provider")?;

    let mut messages = Vec::with_capacity(2);
    if let Some(system) = system {
        messages.push(ChatMessage::system(system));
    }
    messages.push(ChatMessage::user(prompt));

    let result = provider.chat(&messages).await?;

    println!("{}", result.content);
    println!();
    println!("model: {}", result.model);
    if let Some(reason) = &result.finish_reason {
        println!("finish: {reason}");
    }
    match &result.usage {
        Some(usage) => {
            let source = if usage.estimated { " (estimated)" } else { "" };
            println!(
                "tokens: {} prompt + {} completion = {}{source}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
            println!("cost: ${:.6}", provider.estimate_cost(usage));
        }
        None => println!("tokens: not reported"),
    }

    Ok(())
}
