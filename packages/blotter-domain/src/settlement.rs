use serde_json::Value;

use crate::trade::{NormalizedTradeRecord, TradeRecord};

pub const SETTLEMENT_FIELD_NAME: &str = "SETTLEMENT_INSTRUCTIONS";

/// Derives the settlement-instruction text from a record's raw
/// `additionalFields` value.
///
/// The scan stops at the first array element that is an object named
/// `SETTLEMENT_INSTRUCTIONS` (exact, case-sensitive match); its `fieldValue`
/// wins when it is a non-empty string and yields an empty result otherwise.
/// Every malformed shape (no bag, bag not an array, non-object elements,
/// missing or non-string values) degrades to the empty string.
pub fn settlement_instructions(additional_fields: &Value) -> String {
	let Some(entries) = additional_fields.as_array() else {
		return String::new();
	};

	let matched = entries.iter().find_map(|entry| {
		let obj = entry.as_object()?;

		(obj.get("fieldName").and_then(Value::as_str) == Some(SETTLEMENT_FIELD_NAME))
			.then(|| obj.get("fieldValue"))
	});

	match matched.flatten().and_then(Value::as_str) {
		Some(value) if !value.is_empty() => value.to_string(),
		_ => String::new(),
	}
}

/// Appends the derived settlement-instruction field. The source record is
/// consumed untouched; re-deriving from the result yields the same value.
pub fn normalize_trade(record: TradeRecord) -> NormalizedTradeRecord {
	let settlement_instructions = settlement_instructions(&record.additional_fields);

	NormalizedTradeRecord { record, settlement_instructions }
}
