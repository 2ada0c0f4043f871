//! Data summary rendered into the smart-money prompt
//!
//! Each source contributes a markdown section capped to its most relevant
//! entries. Sources without items are left out.

use super::{CollectedData, DataItem, SmartMoneyData};
use serde_json::{Map, Value};
use std::fmt::Write;

/// Congressional trades listed
pub const CONGRESS_LIMIT: usize = 15;
/// Consensus holdings listed from hedge-fund metadata
pub const CONSENSUS_HOLDINGS_LIMIT: usize = 10;
/// Individual hedge-fund positions listed
pub const HEDGE_FUND_LIMIT: usize = 20;
/// Prediction markets listed
pub const PREDICTION_LIMIT: usize = 10;
/// Outcomes listed per prediction market
pub const OUTCOMES_PER_MARKET: usize = 2;
/// Tickers listed per social source
pub const SOCIAL_LIMIT: usize = 15;

const UNKNOWN: &str = "unknown";

/// Render every non-empty dataset as one markdown summary
#[must_use]
pub fn prepare_data_summary(data: &SmartMoneyData) -> String {
    let mut out = String::new();

    if let Some(congress) = non_empty(data.congress_trading.as_ref()) {
        congress_section(&mut out, congress);
    }
    if let Some(hedge_fund) = non_empty(data.hedge_fund.as_ref()) {
        hedge_fund_section(&mut out, hedge_fund);
    }
    if let Some(prediction) = non_empty(data.prediction_market.as_ref()) {
        prediction_section(&mut out, prediction);
    }
    if let Some(reddit) = non_empty(data.social_sentiment.as_ref()) {
        reddit_section(&mut out, reddit);
    }
    if let Some(twitter) = non_empty(data.twitter_sentiment.as_ref()) {
        twitter_section(&mut out, twitter);
    }

    out
}

fn non_empty(data: Option<&CollectedData>) -> Option<&CollectedData> {
    data.filter(|d| !d.items.is_empty())
}

// `write!` into a String cannot fail; results are ignored below.

fn congress_section(out: &mut String, data: &CollectedData) {
    let _ = writeln!(out, "## Congressional Trading\n");
    let _ = writeln!(out, "{} trades in total", data.items.len());

    if let Some(buys) = data.metadata.get("buyTrades") {
        let _ = writeln!(out, "- Buys: {}", text(Some(buys), "0"));
        let _ = writeln!(out, "- Sells: {}", text(data.metadata.get("sellTrades"), "0"));
    }

    let _ = writeln!(out, "\nRecent notable trades:");
    for item in data.items.iter().take(CONGRESS_LIMIT) {
        let m = &item.metadata;
        let action = if str_field(m, "transactionType") == Some("buy") {
            "buy"
        } else {
            "sell"
        };
        let _ = writeln!(
            out,
            "- {} ({}): {} {}, amount: {}",
            text(m.get("politician"), UNKNOWN),
            text(m.get("party"), "?"),
            action,
            text(m.get("ticker"), "?"),
            text(m.get("amount"), UNKNOWN),
        );
    }
}

fn hedge_fund_section(out: &mut String, data: &CollectedData) {
    let _ = writeln!(out, "\n## Hedge Fund 13F Holdings\n");
    let _ = writeln!(out, "{} position records in total", data.items.len());

    if let Some(Value::Array(holdings)) = data.metadata.get("topHoldings") {
        let _ = writeln!(out, "\nConsensus holdings (held by several funds):");
        for holding in holdings.iter().take(CONSENSUS_HOLDINGS_LIMIT) {
            let _ = writeln!(
                out,
                "- {}: held by {} funds, total value ${:.2}B",
                text(holding.get("ticker"), "?"),
                text(holding.get("fundsCount"), "0"),
                number(holding.get("totalValue")) / 1e9,
            );
        }
    }

    let _ = writeln!(out, "\nLargest positions:");
    for item in data.items.iter().take(HEDGE_FUND_LIMIT) {
        let m = &item.metadata;
        let _ = writeln!(
            out,
            "- {}: {} ({}), value ${:.1}M",
            text(m.get("fundName"), UNKNOWN),
            text(m.get("ticker"), "?"),
            text(m.get("company"), ""),
            number(m.get("value")) / 1e6,
        );
    }
}

fn prediction_section(out: &mut String, data: &CollectedData) {
    let _ = writeln!(out, "\n## Prediction Markets (Polymarket)\n");
    let _ = writeln!(out, "{} active markets in total", data.items.len());

    let _ = writeln!(out, "\nKey predictions:");
    for item in data.items.iter().take(PREDICTION_LIMIT) {
        let _ = writeln!(out, "- {}", item.title);
        if let Some(Value::Array(outcomes)) = item.metadata.get("outcomes") {
            for outcome in outcomes.iter().take(OUTCOMES_PER_MARKET) {
                let _ = writeln!(
                    out,
                    "  - {}: {:.1}%",
                    text(outcome.get("name"), "?"),
                    number(outcome.get("probability")) * 100.0,
                );
            }
        }
        let _ = writeln!(
            out,
            "  Volume: ${}",
            group_thousands(number(item.metadata.get("volume")))
        );
    }
}

fn reddit_section(out: &mut String, data: &CollectedData) {
    let _ = writeln!(out, "\n## Reddit Sentiment (ApeWisdom)\n");
    let _ = writeln!(out, "{} tickers tracked", data.items.len());

    let _ = writeln!(out, "\nMost discussed:");
    for item in data.items.iter().take(SOCIAL_LIMIT) {
        let m = &item.metadata;
        let _ = writeln!(
            out,
            "- {} {}: rank #{}, {} mentions, sentiment: {}",
            sentiment_marker(item),
            text(m.get("ticker"), "?"),
            text(m.get("rank"), "?"),
            text(m.get("mentions"), "0"),
            text(m.get("sentiment"), "neutral"),
        );
    }
}

fn twitter_section(out: &mut String, data: &CollectedData) {
    let _ = writeln!(out, "\n## X.com Sentiment (StockGeist)\n");
    let _ = writeln!(out, "{} tickers tracked", data.items.len());

    let _ = writeln!(out, "\nMost discussed:");
    for item in data.items.iter().take(SOCIAL_LIMIT) {
        let m = &item.metadata;
        let score = number(m.get("sentimentScore"));
        let sign = if score > 0.0 { "+" } else { "" };
        let trending = if m.get("trending").and_then(Value::as_bool) == Some(true) {
            " (trending)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "- {} {}: sentiment score {sign}{score:.0}, {} mentions{trending}",
            sentiment_marker(item),
            text(m.get("ticker"), "?"),
            text(m.get("messageVolume"), "0"),
        );
    }
}

fn sentiment_marker(item: &DataItem) -> &'static str {
    match str_field(&item.metadata, "sentiment") {
        Some("bullish") => "[+]",
        Some("bearish") => "[-]",
        _ => "[=]",
    }
}

fn str_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

/// Render a scalar metadata value, `fallback` when absent, null or empty
fn text(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => fallback.to_string(),
    }
}

/// Numeric metadata value, 0 when absent or not a number
fn number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// `1234567.8` -> `1,234,568`
fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
    for (i, ch) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0.0 && rounded != "0" {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1_234_567.8), "1,234,568");
        assert_eq!(group_thousands(-12_500.0), "-12,500");
    }

    #[test]
    fn test_text_fallbacks() {
        assert_eq!(text(None, "?"), "?");
        assert_eq!(text(Some(&Value::Null), "?"), "?");
        assert_eq!(text(Some(&Value::String(String::new())), "?"), "?");
        assert_eq!(text(Some(&serde_json::json!(7)), "?"), "7");
        assert_eq!(text(Some(&serde_json::json!("NVDA")), "?"), "NVDA");
    }

    #[test]
    fn test_number_accepts_numeric_strings() {
        assert_eq!(number(Some(&serde_json::json!("2.5"))), 2.5);
        assert_eq!(number(Some(&serde_json::json!(true))), 0.0);
    }
}
