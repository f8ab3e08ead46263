use serde_json::Value;

use blotter_domain::{NormalizedTradeRecord, SearchMode, TradeRecord, settlement};

fn sample_trade() -> Value {
	serde_json::json!({
		"tradeId": 1001,
		"book": "EQ01",
		"counterparty": "ACME",
		"tradeDate": "2024-03-14",
		"additionalFields": [
			{ "fieldName": "SETTLEMENT_INSTRUCTIONS", "fieldValue": "PAY VIA TARGET2" }
		]
	})
}

#[test]
fn record_round_trips_unknown_attributes() {
	let record = TradeRecord::from_value(sample_trade());
	let rendered = serde_json::to_value(&record).expect("Failed to serialize record.");

	assert_eq!(rendered, sample_trade());
}

#[test]
fn normalized_record_serializes_camel_case_field() {
	let normalized = settlement::normalize_trade(TradeRecord::from_value(sample_trade()));
	let rendered = serde_json::to_value(&normalized).expect("Failed to serialize record.");

	assert_eq!(rendered["settlementInstructions"], "PAY VIA TARGET2");
	assert_eq!(rendered["tradeId"], 1001);
	assert_eq!(rendered["additionalFields"][0]["fieldName"], "SETTLEMENT_INSTRUCTIONS");
}

#[test]
fn normalizing_an_already_normalized_payload_keeps_the_value() {
	// A normalized record that went out to the grid and came back as plain
	// JSON re-enters through the same tolerant path as anything else.
	let normalized = settlement::normalize_trade(TradeRecord::from_value(sample_trade()));
	let rendered = serde_json::to_value(&normalized).expect("Failed to serialize record.");
	let reparsed = settlement::normalize_trade(TradeRecord::from_value(rendered));

	assert_eq!(reparsed.settlement_instructions, "PAY VIA TARGET2");
}

#[test]
fn normalized_record_round_trips_through_serde() {
	let normalized = settlement::normalize_trade(TradeRecord::from_value(sample_trade()));
	let rendered = serde_json::to_string(&normalized).expect("Failed to serialize record.");
	let reparsed: NormalizedTradeRecord =
		serde_json::from_str(&rendered).expect("Failed to deserialize record.");

	assert_eq!(reparsed.settlement_instructions, "PAY VIA TARGET2");
	assert_eq!(reparsed.record.trade_id(), Some(1001));
}

#[test]
fn search_mode_serializes_screaming_snake_case() {
	assert_eq!(serde_json::to_value(SearchMode::Structured).unwrap(), "STRUCTURED");
	assert_eq!(serde_json::to_value(SearchMode::Rsql).unwrap(), "RSQL");
	assert_eq!(serde_json::to_value(SearchMode::Settlement).unwrap(), "SETTLEMENT");
}

#[test]
fn only_settlement_mode_is_unpaginated() {
	assert!(SearchMode::Structured.is_paginated());
	assert!(SearchMode::Rsql.is_paginated());
	assert!(!SearchMode::Settlement.is_paginated());
}
