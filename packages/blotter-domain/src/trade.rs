use serde_json::{Map, Value};

/// Trade date-bearing attributes that arrive as full ISO timestamps and are
/// shown as plain `YYYY-MM-DD` dates.
pub const DATE_FIELDS: [&str; 6] = [
	"tradeDate",
	"startDate",
	"maturityDate",
	"executionDate",
	"lastTouchTimestamp",
	"validityStartDate",
];

/// A trade as the Trade Service returns it. The record is deliberately
/// opaque: everything lives in the attribute map except `additionalFields`,
/// which is kept as raw JSON because the backend does not guarantee its
/// shape (missing, not a list, or holding junk entries are all live
/// possibilities that must not fail a whole result set).
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TradeRecord {
	#[serde(rename = "additionalFields", default, skip_serializing_if = "Value::is_null")]
	pub additional_fields: Value,
	#[serde(flatten)]
	pub attrs: Map<String, Value>,
}

impl TradeRecord {
	/// Tolerant constructor: anything that is not a JSON object degrades to
	/// an empty record rather than failing the batch it arrived in.
	pub fn from_value(value: Value) -> Self {
		serde_json::from_value(value).unwrap_or_default()
	}

	pub fn trade_id(&self) -> Option<i64> {
		self.attrs.get("tradeId").and_then(Value::as_i64)
	}
}

/// A [`TradeRecord`] with the derived settlement-instruction field appended.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NormalizedTradeRecord {
	#[serde(flatten)]
	pub record: TradeRecord,
	#[serde(rename = "settlementInstructions")]
	pub settlement_instructions: String,
}

/// Truncates the known date attributes from ISO timestamps to `YYYY-MM-DD`.
/// Plain dates and non-string values pass through untouched.
pub fn truncate_date_fields(record: &mut TradeRecord) {
	for field in DATE_FIELDS {
		if let Some(Value::String(raw)) = record.attrs.get_mut(field)
			&& let Some((date, _)) = raw.split_once('T')
		{
			*raw = date.to_string();
		}
	}
}

/// Forces `tradeLegs` into the shape the leg editor expects: always an
/// array, every leg carrying `legId`, `legType`, `rate`, and `index` keys
/// (empty string when the backend left one out).
pub fn default_leg_shapes(record: &mut TradeRecord) {
	let legs = record.attrs.entry("tradeLegs").or_insert_with(|| Value::Array(Vec::new()));

	if !legs.is_array() {
		*legs = Value::Array(Vec::new());
	}

	let Value::Array(entries) = legs else {
		return;
	};

	for entry in entries {
		let Some(leg) = entry.as_object_mut() else {
			continue;
		};

		for key in ["legId", "legType", "index"] {
			let slot = leg.entry(key).or_insert(Value::Null);

			if slot.is_null() {
				*slot = Value::String(String::new());
			}
		}

		leg.entry("rate").or_insert_with(|| Value::String(String::new()));
	}
}
