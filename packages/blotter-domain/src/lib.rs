pub mod criteria;
pub mod page;
pub mod settlement;
pub mod trade;

pub use criteria::{CriteriaField, SearchCriteria};
pub use page::PageResult;
pub use trade::{NormalizedTradeRecord, TradeRecord};

/// The active search mode. Exactly one is active at a time; the legacy UI's
/// pair of checkboxes collapses into a single tagged choice so RSQL and
/// settlement search can never be armed together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchMode {
	#[default]
	Structured,
	Rsql,
	Settlement,
}

impl SearchMode {
	pub fn is_paginated(self) -> bool {
		!matches!(self, Self::Settlement)
	}
}
