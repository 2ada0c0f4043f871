use super::*;
use finsight_llm::{Error, MockProvider, ProviderConfig, ProviderKind};
use serde_json::json;

fn dataset(items: Value, metadata: Value) -> CollectedData {
    serde_json::from_value(json!({
        "source": "test",
        "type": "alternative",
        "collectedAt": "2026-10-16T08:00:00Z",
        "items": items,
        "metadata": metadata
    }))
    .unwrap()
}

fn congress(count: usize) -> CollectedData {
    let items: Vec<Value> = (0..count)
        .map(|i| {
            let action = if i % 2 == 0 { "buy" } else { "sale" };
            json!({
                "id": format!("trade-{i}"),
                "title": "Trade",
                "timestamp": "2026-10-15T00:00:00Z",
                "metadata": {
                    "politician": format!("Member {i}"),
                    "party": "D",
                    "ticker": "NVDA",
                    "transactionType": action,
                    "amount": "$15,001 - $50,000"
                }
            })
        })
        .collect();
    dataset(json!(items), json!({"buyTrades": 12, "sellTrades": 8}))
}

fn analyzer(mock: &MockProvider, enabled: bool) -> SmartMoneyAnalyzer {
    let provider = ProviderConfig::new(ProviderKind::OpenAi);
    let config = if enabled {
        EnhancerConfig::enabled(provider)
    } else {
        EnhancerConfig::disabled(provider)
    };
    SmartMoneyAnalyzer::with_provider(
        config,
        PromptLoader::new("/nonexistent", false),
        Arc::new(mock.clone()),
    )
}

const REPLY: &str = r#"Here is my analysis:
```json
{
  "smartMoneyAnalysis": {
    "synthesis": {
      "overallSignal": "bullish",
      "signalStrength": "moderate",
      "focusStocks": [{"ticker": "NVDA", "signals": ["congress", "13F"], "recommendation": "accumulate"}],
      "actionableInsights": ["Scale in on pullbacks"],
      "riskWarnings": ["Crowded trade"]
    },
    "predictionMarket": {
      "summary": "Rate cut priced in",
      "keyPredictions": [{"question": "Fed cut in December?", "probability": "72%", "marketImplication": "Supports duration"}],
      "interpretation": "Dovish"
    }
  },
  "investmentTheses": [{"ticker": "NVDA", "company": "NVIDIA", "thesis": "AI capex", "timeHorizon": "long"}],
  "watchlist": {"topPicks": [{"ticker": "NVDA", "reason": "Consensus", "signalSource": "13F"}], "cautionList": []}
}
```
Let me know if you need more."#;

#[test]
fn test_has_items() {
    assert!(!SmartMoneyData::default().has_items());

    let empty = SmartMoneyData {
        hedge_fund: Some(dataset(json!([]), json!({}))),
        ..Default::default()
    };
    assert!(!empty.has_items());

    let data = SmartMoneyData {
        congress_trading: Some(congress(1)),
        ..Default::default()
    };
    assert!(data.has_items());
}

#[test]
fn test_congress_summary_is_capped() {
    let data = SmartMoneyData {
        congress_trading: Some(congress(40)),
        ..Default::default()
    };
    let summary = prepare_data_summary(&data);

    assert!(summary.starts_with("## Congressional Trading"));
    assert!(summary.contains("40 trades in total"));
    assert!(summary.contains("- Buys: 12\n- Sells: 8"));
    assert!(summary.contains("- Member 0 (D): buy NVDA, amount: $15,001 - $50,000"));
    assert!(summary.contains("- Member 1 (D): sell NVDA"));
    assert!(summary.contains("Member 14 "));
    assert!(!summary.contains("Member 15 "));
}

#[test]
fn test_summary_covers_every_source() {
    let data = SmartMoneyData {
        hedge_fund: Some(dataset(
            json!([{"title": "13F", "metadata": {"fundName": "Bridgewater", "ticker": "MSFT", "company": "Microsoft", "value": 1_250_000_000.0}}]),
            json!({"topHoldings": [{"ticker": "MSFT", "fundsCount": 7, "totalValue": 12_340_000_000.0}]}),
        )),
        prediction_market: Some(dataset(
            json!([{"title": "Fed cut in December?", "metadata": {
                "outcomes": [{"name": "Yes", "probability": 0.72}, {"name": "No", "probability": 0.28}, {"name": "Other", "probability": 0.0}],
                "volume": 1_234_567
            }}]),
            json!({}),
        )),
        social_sentiment: Some(dataset(
            json!([{"title": "GME", "metadata": {"ticker": "GME", "rank": 1, "mentions": 512, "sentiment": "bullish"}}]),
            json!({}),
        )),
        twitter_sentiment: Some(dataset(
            json!([{"title": "TSLA", "metadata": {"ticker": "TSLA", "sentimentScore": -23.4, "messageVolume": 900, "sentiment": "bearish", "trending": true}}]),
            json!({}),
        )),
        ..Default::default()
    };
    let summary = prepare_data_summary(&data);

    assert!(!summary.contains("Congressional Trading"));
    assert!(summary.contains("- MSFT: held by 7 funds, total value $12.34B"));
    assert!(summary.contains("- Bridgewater: MSFT (Microsoft), value $1250.0M"));
    assert!(summary.contains("  - Yes: 72.0%\n  - No: 28.0%\n  Volume: $1,234,567"));
    assert!(!summary.contains("Other"));
    assert!(summary.contains("- [+] GME: rank #1, 512 mentions, sentiment: bullish"));
    assert!(summary.contains("- [-] TSLA: sentiment score -23, 900 mentions (trending)"));
}

#[test]
fn test_parses_enums_and_lenient_probability() {
    let insight = parse_smart_money(REPLY).unwrap();
    let synthesis = insight.smart_money_analysis.synthesis.as_ref().unwrap();

    assert_eq!(synthesis.overall_signal, OverallSignal::Bullish);
    assert_eq!(synthesis.signal_strength, SignalStrength::Moderate);
    assert_eq!(synthesis.focus_stocks[0].signals, vec!["congress", "13F"]);

    let prediction = insight.smart_money_analysis.prediction_market.as_ref().unwrap();
    assert_eq!(prediction.key_predictions[0].probability, json!("72%"));

    let theses = insight.investment_theses.as_ref().unwrap();
    assert_eq!(theses[0].time_horizon, TimeHorizon::Long);
    assert!(theses[0].risk_factors.is_empty());
    assert!(insight.market_outlook.is_none());
}

#[test]
fn test_enums_ignore_case() {
    let reply = r#"{
      "smartMoneyAnalysis": {"synthesis": {"overallSignal": "Bullish", "signalStrength": "STRONG"}},
      "investmentTheses": [{"ticker": "NVDA", "timeHorizon": "Short-term"}]
    }"#;
    let insight = parse_smart_money(reply).unwrap();
    let synthesis = insight.smart_money_analysis.synthesis.as_ref().unwrap();

    assert_eq!(synthesis.overall_signal, OverallSignal::Bullish);
    assert_eq!(synthesis.signal_strength, SignalStrength::Strong);
    assert_eq!(insight.investment_theses.unwrap()[0].time_horizon, TimeHorizon::Short);
}

#[test]
fn test_unknown_enum_value_is_kept_as_unknown() {
    let reply = r#"{"smartMoneyAnalysis": {"synthesis": {"overallSignal": "euphoric", "signalStrength": null}}}"#;
    let insight = parse_smart_money(reply).unwrap();
    let synthesis = insight.smart_money_analysis.synthesis.unwrap();

    assert_eq!(synthesis.overall_signal, OverallSignal::Unknown);
    assert_eq!(synthesis.signal_strength, SignalStrength::Unknown);
    assert_eq!(serde_json::to_value(synthesis.overall_signal).unwrap(), "unknown");
}

#[tokio::test]
async fn test_analyze_disabled_makes_no_call() {
    let mock = MockProvider::new();
    let data = SmartMoneyData {
        congress_trading: Some(congress(3)),
        ..Default::default()
    };

    assert!(analyzer(&mock, false).analyze(&data).await.is_none());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_analyze_without_items_makes_no_call() {
    let mock = MockProvider::new();
    let data = SmartMoneyData {
        congress_trading: Some(congress(0)),
        ..Default::default()
    };

    assert!(analyzer(&mock, true).analyze(&data).await.is_none());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_analyze_success() {
    let mock = MockProvider::new();
    mock.push_reply(REPLY, None);
    let data = SmartMoneyData {
        congress_trading: Some(congress(2)),
        ..Default::default()
    };

    let insight = analyzer(&mock, true).analyze(&data).await.unwrap();
    assert_eq!(insight.watchlist.unwrap().top_picks[0].ticker, "NVDA");

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let conversation = &requests[0];
    assert_eq!(conversation.len(), 2);
    assert!(conversation[0].content.contains("smart money"));
    assert!(conversation[0].content.contains("Current date: "));
    assert!(conversation[1].content.contains("- Member 1 (D): sell NVDA"));
}

#[tokio::test]
async fn test_analyze_provider_error_is_absorbed() {
    let mock = MockProvider::new();
    mock.push_result(Err(Error::Timeout(60_000)));
    let data = SmartMoneyData {
        congress_trading: Some(congress(1)),
        ..Default::default()
    };

    assert!(analyzer(&mock, true).analyze(&data).await.is_none());
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_analyze_unparseable_reply() {
    let mock = MockProvider::new();
    mock.push_reply("I cannot help with that.", None);
    let data = SmartMoneyData {
        congress_trading: Some(congress(1)),
        ..Default::default()
    };

    assert!(analyzer(&mock, true).analyze(&data).await.is_none());
}
