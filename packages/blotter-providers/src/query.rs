use blotter_domain::{SearchCriteria, SearchMode};

use crate::{Error, Result};

/// Fixed page size for the paginated search endpoints.
pub const PAGE_SIZE: u32 = 20;
/// Fixed sort directive: newest trade date first.
pub const SORT_BY: &str = "tradeDate";
pub const SORT_DIR: &str = "desc";

/// A fully resolved search request, one variant per mode. The endpoint paths
/// and parameter names below are the wire contract with the Trade Service
/// and must not drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeQuery {
	Filter { criteria: SearchCriteria, page: u32 },
	Rsql { query: String, page: u32 },
	Settlement { instructions: String },
}

impl TradeQuery {
	pub fn mode(&self) -> SearchMode {
		match self {
			Self::Filter { .. } => SearchMode::Structured,
			Self::Rsql { .. } => SearchMode::Rsql,
			Self::Settlement { .. } => SearchMode::Settlement,
		}
	}

	pub fn endpoint(&self) -> &'static str {
		match self {
			Self::Filter { .. } => "trades/filter",
			Self::Rsql { .. } => "trades/rsql",
			Self::Settlement { .. } => "trades/search/settlement-instructions",
		}
	}

	/// Rejects queries whose required free text is empty after trimming.
	/// Callers check this before going anywhere near the network.
	pub fn validate(&self) -> Result<()> {
		match self {
			Self::Rsql { query, .. } if query.trim().is_empty() => Err(Error::EmptyQuery {
				message: "RSQL query cannot be empty".to_string(),
			}),
			Self::Settlement { instructions } if instructions.trim().is_empty() => {
				Err(Error::EmptyQuery {
					message: "Settlement query cannot be empty".to_string(),
				})
			},
			_ => Ok(()),
		}
	}

	pub fn params(&self) -> Result<Vec<(&'static str, String)>> {
		self.validate()?;

		Ok(match self {
			Self::Filter { criteria, page } => {
				let mut params = Vec::new();

				for (name, value) in [
					("book", &criteria.book),
					("counterparty", &criteria.counterparty),
					("trader", &criteria.trader),
					("tradeStatus", &criteria.trade_status),
					("startDate", &criteria.start_date),
					("endDate", &criteria.end_date),
				] {
					let value = value.trim();

					if !value.is_empty() {
						params.push((name, value.to_string()));
					}
				}

				append_paging(&mut params, *page);

				params
			},
			Self::Rsql { query, page } => {
				let mut params = vec![("query", query.trim().to_string())];

				append_paging(&mut params, *page);

				params
			},
			// Settlement search is unpaginated on the backend.
			Self::Settlement { instructions } => {
				vec![("instructions", instructions.trim().to_string())]
			},
		})
	}
}

fn append_paging(params: &mut Vec<(&'static str, String)>, page: u32) {
	params.push(("page", page.to_string()));
	params.push(("size", PAGE_SIZE.to_string()));
	params.push(("sortBy", SORT_BY.to_string()));
	params.push(("sortDir", SORT_DIR.to_string()));
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	fn param_set(query: &TradeQuery) -> HashSet<String> {
		query
			.params()
			.expect("Failed to build params.")
			.into_iter()
			.map(|(name, value)| format!("{name}={value}"))
			.collect()
	}

	#[test]
	fn filter_omits_blank_criteria() {
		let criteria = SearchCriteria {
			book: "EQ01".to_string(),
			counterparty: "   ".to_string(),
			trade_status: "LIVE".to_string(),
			end_date: "2024-01-01".to_string(),
			..Default::default()
		};
		let query = TradeQuery::Filter { criteria, page: 1 };
		let expected: HashSet<String> = [
			"book=EQ01",
			"tradeStatus=LIVE",
			"endDate=2024-01-01",
			"page=1",
			"size=20",
			"sortBy=tradeDate",
			"sortDir=desc",
		]
		.into_iter()
		.map(str::to_string)
		.collect();

		assert_eq!(param_set(&query), expected);
	}

	#[test]
	fn filter_with_no_criteria_still_pages_and_sorts() {
		let query = TradeQuery::Filter { criteria: SearchCriteria::default(), page: 0 };
		let expected: HashSet<String> =
			["page=0", "size=20", "sortBy=tradeDate", "sortDir=desc"]
				.into_iter()
				.map(str::to_string)
				.collect();

		assert_eq!(param_set(&query), expected);
	}

	#[test]
	fn criteria_values_are_trimmed() {
		let criteria = SearchCriteria { trader: "  jdoe  ".to_string(), ..Default::default() };
		let query = TradeQuery::Filter { criteria, page: 0 };

		assert!(param_set(&query).contains("trader=jdoe"));
	}

	#[test]
	fn rsql_emits_query_plus_paging() {
		let query = TradeQuery::Rsql { query: "book.bookName==EQ01".to_string(), page: 2 };
		let expected: HashSet<String> = [
			"query=book.bookName==EQ01",
			"page=2",
			"size=20",
			"sortBy=tradeDate",
			"sortDir=desc",
		]
		.into_iter()
		.map(str::to_string)
		.collect();

		assert_eq!(param_set(&query), expected);
	}

	#[test]
	fn empty_rsql_is_rejected() {
		let query = TradeQuery::Rsql { query: "   ".to_string(), page: 0 };
		let err = query.params().expect_err("Expected empty-query error.");

		assert_eq!(err.to_string(), "RSQL query cannot be empty");
	}

	#[test]
	fn settlement_emits_instructions_only() {
		let query = TradeQuery::Settlement { instructions: "TARGET2".to_string() };
		let params = query.params().expect("Failed to build params.");

		assert_eq!(params, vec![("instructions", "TARGET2".to_string())]);
	}

	#[test]
	fn empty_settlement_text_is_rejected() {
		let query = TradeQuery::Settlement { instructions: String::new() };
		let err = query.params().expect_err("Expected empty-query error.");

		assert_eq!(err.to_string(), "Settlement query cannot be empty");
	}

	#[test]
	fn endpoints_are_fixed_per_mode() {
		let filter = TradeQuery::Filter { criteria: SearchCriteria::default(), page: 0 };
		let rsql = TradeQuery::Rsql { query: "q".to_string(), page: 0 };
		let settlement = TradeQuery::Settlement { instructions: "i".to_string() };

		assert_eq!(filter.endpoint(), "trades/filter");
		assert_eq!(rsql.endpoint(), "trades/rsql");
		assert_eq!(settlement.endpoint(), "trades/search/settlement-instructions");
	}
}
