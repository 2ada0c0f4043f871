//! `finsight enhance`

use super::io::{read_json, write_json};
use crate::app::AppConfig;
use anyhow::Result;
use finsight_insight::{InsightEnhancer, IntelligentAnalysis};
use std::path::Path;
use tracing::info;

pub async fn run(config: &AppConfig, input: &Path, output: Option<&Path>) -> Result<()> {
    let analysis: IntelligentAnalysis = read_json(input)?;

    let enhancer = InsightEnhancer::new(config.llm.enhancer_config()?, config.prompts.loader())?;
    let enhanced = enhancer.enhance(analysis).await;

    if let Some(metadata) = &enhanced.llm_metadata {
        info!(
            provider = %metadata.provider,
            model = %metadata.model,
            completion_time_ms = metadata.completion_time,
            tokens = metadata.tokens_used,
            cost = metadata.cost,
            "Analysis enhanced"
        );
    }

    write_json(&enhanced, output)
}
