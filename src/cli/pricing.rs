//! `finsight pricing` and `finsight estimate-tokens`

use anyhow::Result;
use finsight_llm::{estimate_cost, estimate_tokens, price_table, ProviderKind};

pub fn run_pricing(
    provider: &str,
    model: &str,
    prompt_tokens: u32,
    completion_tokens: u32,
) -> Result<()> {
    let kind: ProviderKind = provider.parse()?;
    let table = price_table(kind);

    if !table.contains(model) && kind != ProviderKind::Ollama {
        println!(
            "note: {model} is not in the {kind} price table, using {} rates",
            table.default_model
        );
    }

    let cost = estimate_cost(kind, model, prompt_tokens, completion_tokens);
    println!("{cost:.6}");
    Ok(())
}

pub fn run_estimate_tokens(text: &str) {
    println!("{}", estimate_tokens(text));
}
