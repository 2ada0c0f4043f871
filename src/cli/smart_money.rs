//! `finsight smart-money`

use super::io::{read_json, write_json};
use crate::app::AppConfig;
use anyhow::Result;
use finsight_insight::{SmartMoneyAnalyzer, SmartMoneyData};
use std::path::Path;
use tracing::warn;

pub async fn run(config: &AppConfig, input: &Path, output: Option<&Path>) -> Result<()> {
    let data: SmartMoneyData = read_json(input)?;

    let analyzer = SmartMoneyAnalyzer::new(config.llm.enhancer_config()?, config.prompts.loader())?;
    let insight = analyzer.analyze(&data).await;

    if insight.is_none() {
        warn!("No smart-money insight produced");
    }

    write_json(&insight, output)
}
