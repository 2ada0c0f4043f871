//! CLI module for Finsight
//!
//! Provides commands:
//! - `enhance`: Add LLM insight to a rule-engine analysis
//! - `smart-money`: Run the smart-money LLM analysis
//! - `chat`: Send one prompt to the configured provider
//! - `pricing`: Estimate the cost of a call
//! - `estimate-tokens`: Estimate the token count of a text

use crate::app::AppConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod chat;
pub mod enhance;
mod io;
pub mod pricing;
pub mod smart_money;

/// Finsight market-analysis CLI
#[derive(Parser, Debug)]
#[command(name = "finsight")]
#[command(about = "LLM-enhanced market analysis")]
#[command(version)]
pub struct Cli {
    /// Additional configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enhance a rule-engine analysis with LLM insight
    Enhance {
        /// Analysis JSON produced by the rule engine
        #[arg(short, long)]
        input: PathBuf,
        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Analyze smart-money datasets with the LLM
    SmartMoney {
        /// JSON object with congressTrading, hedgeFund, predictionMarket,
        /// socialSentiment and twitterSentiment datasets
        #[arg(short, long)]
        input: PathBuf,
        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Send one prompt and print the reply
    Chat {
        /// System prompt
        #[arg(short, long)]
        system: Option<String>,
        /// User prompt
        prompt: String,
    },
    /// Estimate the USD cost of a call
    Pricing {
        /// openai, anthropic, google, ollama or deepseek
        provider: String,
        /// Model identifier
        model: String,
        prompt_tokens: u32,
        completion_tokens: u32,
    },
    /// Estimate the token count of a text
    EstimateTokens {
        text: String,
    },
}

/// Run the CLI command
pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Enhance { input, output }) => {
            enhance::run(&config, &input, output.as_deref()).await
        }
        Some(Commands::SmartMoney { input, output }) => {
            smart_money::run(&config, &input, output.as_deref()).await
        }
        Some(Commands::Chat { system, prompt }) => {
            chat::run(&config, system.as_deref(), &prompt).await
        }
        Some(Commands::Pricing {
            provider,
            model,
            prompt_tokens,
            completion_tokens,
        }) => pricing::run_pricing(&provider, &model, prompt_tokens, completion_tokens),
        Some(Commands::EstimateTokens { text }) => {
            pricing::run_estimate_tokens(&text);
            Ok(())
        }
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_pricing() {
        let cli = Cli::try_parse_from(["finsight", "pricing", "deepseek", "deepseek-chat", "1000", "500"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Pricing { prompt_tokens: 1000, completion_tokens: 500, .. })
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["finsight", "enhance", "-i", "a.json", "--json-logs"]).unwrap();
        assert!(cli.json_logs);
        assert!(matches!(cli.command, Some(Commands::Enhance { output: None, .. })));
    }
}
