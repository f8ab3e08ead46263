use blotter_domain::{CriteriaField, PageResult, SearchCriteria, SearchMode};

use crate::SearchController;

/// The controller's observable state. Snapshots are cheap clones handed to
/// the binding layer; nothing outside the controller mutates one in place.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControllerState {
	pub mode: SearchMode,
	pub criteria: SearchCriteria,
	pub rsql_query: String,
	pub settlement_text: String,
	pub page: u32,
	pub result: Option<PageResult>,
	pub loading: bool,
	pub error: Option<String>,
	pub has_searched: bool,
}

/// Lifecycle phase derived from a snapshot. Derived rather than stored so
/// the phase and the fields it summarizes cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Idle,
	Searching,
	Results,
	NoResults,
	Error,
}

impl ControllerState {
	pub fn phase(&self) -> Phase {
		if self.loading {
			return Phase::Searching;
		}
		if self.error.is_some() {
			return Phase::Error;
		}
		if !self.has_searched {
			return Phase::Idle;
		}

		match &self.result {
			Some(result) if !result.items.is_empty() => Phase::Results,
			_ => Phase::NoResults,
		}
	}
}

impl SearchController {
	/// Switches the active mode. Criteria and query text entered for the
	/// other modes stay put (they simply are not sent), but results from the
	/// previous mode are not comparable to the next one's, so `result`,
	/// `error`, and `has_searched` reset and any in-flight search is voided.
	pub fn set_mode(&self, mode: SearchMode) {
		self.invalidate_in_flight();
		self.state.send_modify(|state| {
			state.mode = mode;
			state.result = None;
			state.error = None;
			state.has_searched = false;
		});
	}

	pub fn update_criteria(&self, field: CriteriaField, value: impl Into<String>) {
		let value = value.into();

		self.state.send_modify(|state| state.criteria.set(field, value));
	}

	pub fn update_rsql_query(&self, text: impl Into<String>) {
		let text = text.into();

		self.state.send_modify(|state| state.rsql_query = text);
	}

	pub fn update_settlement_text(&self, text: impl Into<String>) {
		let text = text.into();

		self.state.send_modify(|state| state.settlement_text = text);
	}

	/// Full reset to the initial state, voiding any in-flight search.
	pub fn clear(&self) {
		self.invalidate_in_flight();
		self.state.send_modify(|state| *state = ControllerState::default());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fresh_state_is_idle() {
		assert_eq!(ControllerState::default().phase(), Phase::Idle);
	}

	#[test]
	fn loading_wins_over_everything() {
		let state = ControllerState {
			loading: true,
			error: Some("boom".to_string()),
			has_searched: true,
			..Default::default()
		};

		assert_eq!(state.phase(), Phase::Searching);
	}

	#[test]
	fn error_wins_over_results() {
		let state = ControllerState {
			error: Some("boom".to_string()),
			result: Some(PageResult::default()),
			has_searched: true,
			..Default::default()
		};

		assert_eq!(state.phase(), Phase::Error);
	}

	#[test]
	fn searched_with_empty_result_is_no_results() {
		let state = ControllerState {
			has_searched: true,
			result: Some(PageResult::default()),
			..Default::default()
		};

		assert_eq!(state.phase(), Phase::NoResults);

		let state = ControllerState { has_searched: true, ..Default::default() };

		assert_eq!(state.phase(), Phase::NoResults);
	}
}
