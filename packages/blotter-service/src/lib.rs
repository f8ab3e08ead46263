pub mod lookup;
pub mod normalize;
pub mod search;
pub mod state;

mod error;

pub use error::{Error, Result};
pub use state::{ControllerState, Phase};

use std::{
	future::Future,
	pin::Pin,
	sync::{
		Arc,
		atomic::{AtomicU64, Ordering},
	},
};

use tokio::sync::watch;

use blotter_config::{Config, TradeService};
use blotter_domain::TradeRecord;
use blotter_providers::{
	query::TradeQuery,
	trades::{self, SearchPayload},
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The Trade Service seam. The controller only ever talks to this trait, so
/// tests (and any non-HTTP embedding) can swap the backend out wholesale.
pub trait TradeSource
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		cfg: &'a TradeService,
		query: &'a TradeQuery,
	) -> BoxFuture<'a, Result<SearchPayload>>;

	fn lookup<'a>(&'a self, cfg: &'a TradeService, id: i64) -> BoxFuture<'a, Result<TradeRecord>>;
}

struct HttpTradeSource;

impl TradeSource for HttpTradeSource {
	fn search<'a>(
		&'a self,
		cfg: &'a TradeService,
		query: &'a TradeQuery,
	) -> BoxFuture<'a, Result<SearchPayload>> {
		Box::pin(async move { trades::search(cfg, query).await.map_err(Error::from) })
	}

	fn lookup<'a>(&'a self, cfg: &'a TradeService, id: i64) -> BoxFuture<'a, Result<TradeRecord>> {
		Box::pin(async move { trades::lookup(cfg, id).await.map_err(Error::from) })
	}
}

/// One search controller per UI session. State lives in a watch cell: every
/// mutation publishes a fresh snapshot, and any number of binding layers can
/// subscribe without the controller knowing about them.
pub struct SearchController {
	cfg: Config,
	source: Arc<dyn TradeSource>,
	state: watch::Sender<ControllerState>,
	issued: AtomicU64,
}

impl SearchController {
	pub fn new(cfg: Config) -> Self {
		Self::with_source(cfg, Arc::new(HttpTradeSource))
	}

	pub fn with_source(cfg: Config, source: Arc<dyn TradeSource>) -> Self {
		let (state, _) = watch::channel(ControllerState::default());

		Self { cfg, source, state, issued: AtomicU64::new(0) }
	}

	pub fn snapshot(&self) -> ControllerState {
		self.state.borrow().clone()
	}

	pub fn subscribe(&self) -> watch::Receiver<ControllerState> {
		self.state.subscribe()
	}

	/// Advances the sequence so any search still in flight resolves stale
	/// and its response is dropped on arrival.
	pub(crate) fn invalidate_in_flight(&self) -> u64 {
		self.issued.fetch_add(1, Ordering::SeqCst) + 1
	}

	pub(crate) fn latest_issued(&self) -> u64 {
		self.issued.load(Ordering::SeqCst)
	}
}
