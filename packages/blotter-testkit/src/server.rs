use std::{
	collections::HashMap,
	net::SocketAddr,
	sync::{Arc, Mutex},
};

use axum::{
	Json, Router,
	extract::{Request, State},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde_json::Value;
use tokio::{net::TcpListener, task::JoinHandle};

use crate::Result;

/// Canned payloads served per endpoint. Trades not present in `trades`
/// return 404, matching the real service.
#[derive(Debug, Clone, Default)]
pub struct FixtureResponses {
	pub filter: Value,
	pub rsql: Value,
	pub settlement: Value,
	pub trades: HashMap<i64, Value>,
}

/// One request as the fixture server saw it.
#[derive(Debug, Clone)]
pub struct SeenRequest {
	pub path: String,
	pub raw_query: String,
	pub headers: Vec<(String, String)>,
}

#[derive(Clone)]
struct FixtureState {
	responses: Arc<FixtureResponses>,
	seen: Arc<Mutex<Vec<SeenRequest>>>,
}

/// In-process Trade Service double on an ephemeral port, for exercising the
/// real HTTP path end to end. Captures every request for later assertions.
pub struct FixtureTradeServer {
	addr: SocketAddr,
	handle: JoinHandle<()>,
	seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl FixtureTradeServer {
	pub async fn start(responses: FixtureResponses) -> Result<Self> {
		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let seen = Arc::new(Mutex::new(Vec::new()));
		let state =
			FixtureState { responses: Arc::new(responses), seen: seen.clone() };
		let app = Router::new().fallback(handle).with_state(state);
		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		Ok(Self { addr, handle, seen })
	}

	pub fn api_base(&self) -> String {
		format!("http://{}", self.addr)
	}

	pub fn trade_service(&self) -> blotter_config::TradeService {
		blotter_config::TradeService {
			api_base: self.api_base(),
			timeout_ms: 2_000,
			default_headers: serde_json::Map::new(),
		}
	}

	pub fn requests(&self) -> Vec<SeenRequest> {
		self.seen.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}
}
impl Drop for FixtureTradeServer {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

async fn handle(State(state): State<FixtureState>, req: Request) -> Response {
	let path = req.uri().path().to_string();
	let raw_query = req.uri().query().unwrap_or("").to_string();
	let headers = req
		.headers()
		.iter()
		.map(|(name, value)| {
			(name.as_str().to_string(), String::from_utf8_lossy(value.as_bytes()).to_string())
		})
		.collect();

	state
		.seen
		.lock()
		.unwrap_or_else(|err| err.into_inner())
		.push(SeenRequest { path: path.clone(), raw_query, headers });

	match path.as_str() {
		"/trades/filter" => Json(state.responses.filter.clone()).into_response(),
		"/trades/rsql" => Json(state.responses.rsql.clone()).into_response(),
		"/trades/search/settlement-instructions" => {
			Json(state.responses.settlement.clone()).into_response()
		},
		path => match path.strip_prefix("/trades/").and_then(|raw| raw.parse::<i64>().ok()) {
			Some(id) => match state.responses.trades.get(&id) {
				Some(trade) => Json(trade.clone()).into_response(),
				None => StatusCode::NOT_FOUND.into_response(),
			},
			None => StatusCode::NOT_FOUND.into_response(),
		},
	}
}
