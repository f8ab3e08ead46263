use tracing::{info, warn};

use blotter_domain::SearchMode;
use blotter_providers::query::TradeQuery;

use crate::{ControllerState, Error, SearchController, normalize};

impl SearchController {
	/// Runs a search in the active mode and publishes the outcome.
	///
	/// A validation failure (empty required query text) short-circuits the
	/// whole call: the error is surfaced, loading is cleared, and nothing is
	/// sent. A completion that is no longer the latest issued request is
	/// dropped without touching state, so results always land in issuance
	/// order. Errors never escape; the returned snapshot is a convenience
	/// for callers that do not subscribe.
	pub async fn search(&self, page: u32) -> ControllerState {
		let seq = self.invalidate_in_flight();
		let query = {
			let state = self.state.borrow();

			match state.mode {
				SearchMode::Structured => {
					TradeQuery::Filter { criteria: state.criteria.clone(), page }
				},
				SearchMode::Rsql => TradeQuery::Rsql { query: state.rsql_query.clone(), page },
				SearchMode::Settlement => {
					TradeQuery::Settlement { instructions: state.settlement_text.clone() }
				},
			}
		};
		// Settlement search has no pages; the current page pins to 0.
		let recorded_page = if query.mode().is_paginated() { page } else { 0 };

		self.state.send_modify(|state| {
			state.loading = true;
			state.has_searched = true;
			state.error = None;
			state.page = recorded_page;
		});

		if let Err(err) = query.validate() {
			let message = Error::from(err).to_string();

			self.state.send_modify(|state| {
				state.error = Some(message);
				state.loading = false;
			});

			return self.snapshot();
		}

		info!(mode = ?query.mode(), page = recorded_page, "Issuing trade search.");

		let outcome = self.source.search(&self.cfg.trade_service, &query).await;

		if self.latest_issued() != seq {
			warn!(seq, "Discarding stale search response.");

			return self.snapshot();
		}

		match outcome {
			Ok(payload) => {
				let result = normalize::normalize(payload, recorded_page);

				self.state.send_modify(|state| {
					state.result = Some(result);
					state.error = None;
					state.loading = false;
				});
			},
			Err(err) => {
				let message = err.to_string();

				warn!(%message, "Trade search failed.");

				self.state.send_modify(|state| {
					state.error = Some(message);
					state.result = None;
					state.loading = false;
				});
			},
		}

		self.snapshot()
	}

	/// Fetches another page of the current search. No range check happens
	/// here; disabling out-of-range pager buttons is the UI's affordance and
	/// the backend owns the verdict on pages it has never heard of.
	pub async fn change_page(&self, new_page: u32) -> ControllerState {
		self.search(new_page).await
	}
}
