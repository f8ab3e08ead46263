mod error;
mod server;

pub use error::{Error, Result};
pub use server::{FixtureResponses, FixtureTradeServer, SeenRequest};

use std::{
	collections::VecDeque,
	sync::Mutex,
	time::Duration,
};

use serde_json::Value;

use blotter_config::TradeService;
use blotter_domain::TradeRecord;
use blotter_providers::{query::TradeQuery, trades::SearchPayload};
use blotter_service::{BoxFuture, TradeSource};

/// A scripted response for one [`ScriptedTradeSource`] search call.
pub struct ScriptedSearch {
	pub delay: Option<Duration>,
	pub outcome: blotter_service::Result<SearchPayload>,
}

/// Stand-in for the Trade Service behind the controller's injection seam.
/// Responses are consumed in call order; every search call is recorded so
/// tests can assert exactly what would have gone over the wire.
#[derive(Default)]
pub struct ScriptedTradeSource {
	searches: Mutex<VecDeque<ScriptedSearch>>,
	lookups: Mutex<VecDeque<blotter_service::Result<TradeRecord>>>,
	calls: Mutex<Vec<TradeQuery>>,
}

impl ScriptedTradeSource {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn enqueue_search(&self, outcome: blotter_service::Result<SearchPayload>) {
		self.enqueue_search_scripted(ScriptedSearch { delay: None, outcome });
	}

	pub fn enqueue_search_after(
		&self,
		delay: Duration,
		outcome: blotter_service::Result<SearchPayload>,
	) {
		self.enqueue_search_scripted(ScriptedSearch { delay: Some(delay), outcome });
	}

	pub fn enqueue_search_scripted(&self, scripted: ScriptedSearch) {
		self.searches.lock().unwrap_or_else(|err| err.into_inner()).push_back(scripted);
	}

	pub fn enqueue_lookup(&self, outcome: blotter_service::Result<TradeRecord>) {
		self.lookups.lock().unwrap_or_else(|err| err.into_inner()).push_back(outcome);
	}

	/// Every search the controller actually issued, in order.
	pub fn calls(&self) -> Vec<TradeQuery> {
		self.calls.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}
}

impl TradeSource for ScriptedTradeSource {
	fn search<'a>(
		&'a self,
		_cfg: &'a TradeService,
		query: &'a TradeQuery,
	) -> BoxFuture<'a, blotter_service::Result<SearchPayload>> {
		self.calls.lock().unwrap_or_else(|err| err.into_inner()).push(query.clone());

		let scripted = self.searches.lock().unwrap_or_else(|err| err.into_inner()).pop_front();

		Box::pin(async move {
			let Some(scripted) = scripted else {
				return Err(blotter_service::Error::Transport {
					message: "No scripted search response left.".to_string(),
				});
			};

			if let Some(delay) = scripted.delay {
				tokio::time::sleep(delay).await;
			}

			scripted.outcome
		})
	}

	fn lookup<'a>(
		&'a self,
		_cfg: &'a TradeService,
		_id: i64,
	) -> BoxFuture<'a, blotter_service::Result<TradeRecord>> {
		let outcome = self.lookups.lock().unwrap_or_else(|err| err.into_inner()).pop_front();

		Box::pin(async move {
			outcome.unwrap_or_else(|| {
				Err(blotter_service::Error::Transport {
					message: "No scripted lookup response left.".to_string(),
				})
			})
		})
	}
}

/// A config whose Trade Service section points nowhere in particular; pair
/// it with a [`ScriptedTradeSource`] that never dials out.
pub fn offline_config() -> blotter_config::Config {
	blotter_config::Config {
		service: blotter_config::Service { log_level: "info".to_string() },
		trade_service: TradeService {
			api_base: "http://localhost:0/api".to_string(),
			timeout_ms: 1_000,
			default_headers: serde_json::Map::new(),
		},
	}
}

pub fn trade_json(id: i64) -> Value {
	serde_json::json!({
		"tradeId": id,
		"book": "EQ01",
		"counterparty": "ACME",
		"tradeStatus": "LIVE",
		"tradeDate": "2024-03-14",
		"additionalFields": []
	})
}

pub fn trade_json_with_settlement(id: i64, instructions: &str) -> Value {
	let mut trade = trade_json(id);

	trade["additionalFields"] = serde_json::json!([
		{ "fieldName": "SETTLEMENT_INSTRUCTIONS", "fieldValue": instructions }
	]);

	trade
}

pub fn trade_record(id: i64) -> TradeRecord {
	TradeRecord::from_value(trade_json(id))
}

pub fn paged_json(content: Vec<Value>, total_pages: u32, total_elements: u64) -> Value {
	serde_json::json!({
		"content": content,
		"totalPages": total_pages,
		"totalElements": total_elements
	})
}
