use super::*;
use crate::insight::{
    ScenarioAnalysis, StrategicRecommendations, DIAGNOSTIC_PREFIX_CHARS, PARSE_FAILED_SENTINEL,
};
use serde_json::json;

fn recommendations(insight: &StructuredInsight) -> StrategicRecommendations {
    insight
        .section(StructuredInsight::STRATEGIC_RECOMMENDATIONS)
        .unwrap()
}

const VALID: &str = r#"{
  "macroEconomicInsights": {
    "summary": "Growth is slowing but not contracting",
    "implications": ["Earnings estimates drift lower"],
    "riskFactors": ["Sticky services inflation"],
    "opportunities": ["Quality large caps"]
  },
  "strategicRecommendations": {
    "shortTerm": ["Trim high-beta exposure"],
    "mediumTerm": ["Add duration on rallies"],
    "longTerm": ["Overweight AI infrastructure"],
    "riskManagement": ["Index puts"],
    "portfolioAllocation": "60/30/10"
  },
  "scenarioAnalysis": {
    "bullCase": {"probability": 25, "triggers": ["Rate cuts"], "marketPerformance": "+15%", "bestPerformers": ["Semis"]},
    "baseCase": {"probability": 55, "description": "Range-bound", "marketPerformance": "+3%", "strategy": "Barbell"},
    "bearCase": {"probability": 20, "triggers": ["Credit event"], "marketPerformance": "-18%", "defensiveStrategy": "Cash"}
  }
}"#;

#[test]
fn test_extract_prefers_json_fence() {
    let text = "Intro\n```\nnot this\n```\n```json\n{\"a\": 1}\n```\nOutro";
    assert_eq!(extract_json_candidate(text), "{\"a\": 1}");
}

#[test]
fn test_extract_unlabeled_fence() {
    let text = "Result:\n```\n{\"a\": 1}\n```";
    assert_eq!(extract_json_candidate(text), "{\"a\": 1}");
}

#[test]
fn test_extract_whole_text() {
    assert_eq!(extract_json_candidate("  {\"a\": 1}\n"), "{\"a\": 1}");
}

#[test]
fn test_narrow_to_object() {
    assert_eq!(narrow_to_object("Sure! {\"a\": {\"b\": 2}} Hope it helps."), Some("{\"a\": {\"b\": 2}}"));
    assert_eq!(narrow_to_object("no braces"), None);
    assert_eq!(narrow_to_object("} backwards {"), None);
}

#[test]
fn test_parse_bare_json() {
    let insight = parse_insight(VALID);

    assert!(!insight.is_placeholder());
    assert_eq!(insight.summary(), Some("Growth is slowing but not contracting"));
    assert_eq!(recommendations(&insight).risk_management, vec!["Index puts"]);

    let scenarios: ScenarioAnalysis = insight.section(StructuredInsight::SCENARIO_ANALYSIS).unwrap();
    assert_eq!(scenarios.bull_case.probability, 25.0);
    assert_eq!(scenarios.base_case.probability, 55.0);
    assert_eq!(scenarios.bear_case.probability, 20.0);
    assert!(insight.get("monetaryPolicyInsights").is_none());
}

#[test]
fn test_parse_fenced_json_with_prose() {
    let text = format!("Here is the analysis you asked for.\n\n```json\n{VALID}\n```\n\nLet me know if you need more.");
    let insight = parse_insight(&text);

    assert!(!insight.is_placeholder());
    assert_eq!(recommendations(&insight).short_term, vec!["Trim high-beta exposure"]);
}

#[test]
fn test_accepted_reply_is_kept_unchanged() {
    let input = json!({
        "macroEconomicInsights": {"summary": "a", "confidence": "high"},
        "strategicRecommendations": {"shortTerm": ["Buy"]},
        "scenarioAnalysis": {"bullCase": {"probability": 40, "marketPerformance": "+12%"}}
    });
    let fenced = format!("```json\n{}\n```", serde_json::to_string_pretty(&input).unwrap());

    let insight = parse_insight(&fenced);

    assert!(!insight.is_placeholder());
    assert_eq!(serde_json::to_value(&insight).unwrap(), input);
}

#[test]
fn test_optional_field_shapes_are_not_validated() {
    let text = r#"{
      "macroEconomicInsights": {"summary": "Real data", "implications": null, "riskFactors": "rates"},
      "strategicRecommendations": {"shortTerm": ["Buy"]},
      "scenarioAnalysis": {"bullCase": {"probability": "60%"}}
    }"#;

    let insight = try_parse_insight(text).unwrap();

    assert_eq!(insight.summary(), Some("Real data"));
    assert_eq!(insight.get("macroEconomicInsights").unwrap()["implications"], Value::Null);
    assert_eq!(
        insight.get("scenarioAnalysis").unwrap()["bullCase"]["probability"],
        "60%"
    );
    // The typed view rejects the string probability, the document keeps it
    assert!(insight
        .section::<ScenarioAnalysis>(StructuredInsight::SCENARIO_ANALYSIS)
        .is_none());
}

#[test]
fn test_unknown_keys_are_preserved() {
    let text = r#"{
      "macroEconomicInsights": {"summary": "ok"},
      "strategicRecommendations": {},
      "confidence": 0.8
    }"#;
    let insight = parse_insight(text);

    assert!(!insight.is_placeholder());
    assert_eq!(insight.get("confidence"), Some(&json!(0.8)));
    assert!(recommendations(&insight).short_term.is_empty());

    let value = serde_json::to_value(&insight).unwrap();
    assert_eq!(value["confidence"], 0.8);
    assert!(value.get("catalystTimeline").is_none());
    assert_eq!(value["strategicRecommendations"], json!({}));
}

#[test]
fn test_no_json_yields_placeholder() {
    let reply = "I'm sorry, I can't produce an analysis right now. ".repeat(10);
    let insight = parse_insight(&reply);

    assert!(insight.is_placeholder());
    let summary = insight.summary().unwrap();
    assert_eq!(summary.chars().count(), DIAGNOSTIC_PREFIX_CHARS);
    assert!(reply.starts_with(summary));
    assert_eq!(recommendations(&insight).portfolio_allocation, PARSE_FAILED_SENTINEL);
}

#[test]
fn test_missing_mandatory_key_yields_placeholder() {
    let text = r#"{"macroEconomicInsights": {"summary": "Only half an answer"}}"#;

    assert!(matches!(
        try_parse_insight(text),
        Err(ParseError::MissingField("strategicRecommendations"))
    ));
    assert!(parse_insight(text).is_placeholder());
}

#[test]
fn test_mandatory_key_must_be_object() {
    let text = r#"{"macroEconomicInsights": "bullish", "strategicRecommendations": {}}"#;
    assert!(matches!(
        try_parse_insight(text),
        Err(ParseError::MissingField("macroEconomicInsights"))
    ));
}

#[test]
fn test_array_is_not_an_object() {
    assert!(matches!(try_parse_insight("[1, 2]"), Err(ParseError::NotAnObject)));
}

#[test]
fn test_truncated_json_yields_placeholder() {
    let truncated = &VALID[..VALID.len() / 2];
    assert!(parse_insight(truncated).is_placeholder());
}

#[test]
fn test_smart_money_prose_around_braces() {
    let text = r#"Sure, here you go: {"marketOutlook": {"shortTerm": "Choppy", "keyRisks": ["Tariffs"]}} Thanks!"#;
    let insight = parse_smart_money(text).unwrap();

    let outlook = insight.market_outlook.unwrap();
    assert_eq!(outlook.short_term, "Choppy");
    assert_eq!(outlook.key_risks, vec!["Tariffs"]);
}

#[test]
fn test_smart_money_garbage() {
    assert!(parse_smart_money("no structured output today").is_none());
    assert!(matches!(
        try_parse_smart_money("nothing here"),
        Err(ParseError::NoJsonObject)
    ));
    assert!(parse_smart_money("{ definitely not json }").is_none());
}
