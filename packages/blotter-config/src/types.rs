use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub trade_service: TradeService,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct TradeService {
	pub api_base: String,
	pub timeout_ms: u64,
	/// Optional. Headers attached to every Trade Service request, e.g. an
	/// `X-User-Id` the backend expects on read endpoints.
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}
