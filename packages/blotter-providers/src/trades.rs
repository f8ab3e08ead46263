// std
use std::time::Duration as StdDuration;

// crates.io
use reqwest::{Client, StatusCode};
use serde_json::Value;

// self
use blotter_config::TradeService;
use blotter_domain::TradeRecord;

use crate::{Error, Result, query::TradeQuery};

/// A search response before normalization. Paged and unpaged endpoints
/// return different shapes; reconciling them into one page is the service
/// layer's job.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPayload {
	Paged { content: Vec<TradeRecord>, total_pages: u32, total_elements: u64 },
	Unpaged(Vec<TradeRecord>),
}

pub async fn search(cfg: &TradeService, query: &TradeQuery) -> Result<SearchPayload> {
	let params = query.params()?;
	let res = client(cfg)?
		.get(endpoint_url(&cfg.api_base, query.endpoint()))
		.query(&params)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	Ok(match query {
		TradeQuery::Settlement { .. } => parse_unpaged(json),
		_ => parse_paged(json),
	})
}

pub async fn lookup(cfg: &TradeService, id: i64) -> Result<TradeRecord> {
	let res = client(cfg)?.get(endpoint_url(&cfg.api_base, &format!("trades/{id}"))).send().await?;

	if res.status() == StatusCode::NOT_FOUND {
		return Err(Error::TradeNotFound { id });
	}

	let json: Value = res.error_for_status()?.json().await?;

	Ok(TradeRecord::from_value(json))
}

fn client(cfg: &TradeService) -> Result<Client> {
	Ok(Client::builder()
		.timeout(StdDuration::from_millis(cfg.timeout_ms))
		.default_headers(crate::default_headers(&cfg.default_headers)?)
		.build()?)
}

fn endpoint_url(api_base: &str, endpoint: &str) -> String {
	format!("{}/{}", api_base.trim_end_matches('/'), endpoint.trim_start_matches('/'))
}

fn parse_paged(json: Value) -> SearchPayload {
	let Some(entries) = json.get("content").and_then(Value::as_array) else {
		return SearchPayload::Paged { content: Vec::new(), total_pages: 0, total_elements: 0 };
	};

	SearchPayload::Paged {
		content: records(entries),
		total_pages: json.get("totalPages").and_then(Value::as_u64).unwrap_or(0) as u32,
		total_elements: json.get("totalElements").and_then(Value::as_u64).unwrap_or(0),
	}
}

fn parse_unpaged(json: Value) -> SearchPayload {
	SearchPayload::Unpaged(json.as_array().map(|entries| records(entries)).unwrap_or_default())
}

fn records(entries: &[Value]) -> Vec<TradeRecord> {
	entries.iter().map(|entry| TradeRecord::from_value(entry.clone())).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn paged_payload_extracts_content_and_totals() {
		let json = serde_json::json!({
			"content": [{ "tradeId": 1 }, { "tradeId": 2 }],
			"totalPages": 5,
			"totalElements": 93
		});

		let SearchPayload::Paged { content, total_pages, total_elements } = parse_paged(json)
		else {
			panic!("Expected a paged payload.");
		};

		assert_eq!(content.len(), 2);
		assert_eq!(content[0].trade_id(), Some(1));
		assert_eq!(total_pages, 5);
		assert_eq!(total_elements, 93);
	}

	#[test]
	fn missing_content_means_an_empty_page() {
		let json = serde_json::json!({ "totalPages": 9, "totalElements": 170 });

		assert_eq!(
			parse_paged(json),
			SearchPayload::Paged { content: Vec::new(), total_pages: 0, total_elements: 0 }
		);
	}

	#[test]
	fn missing_totals_default_to_zero() {
		let json = serde_json::json!({ "content": [{ "tradeId": 1 }] });

		let SearchPayload::Paged { content, total_pages, total_elements } = parse_paged(json)
		else {
			panic!("Expected a paged payload.");
		};

		assert_eq!(content.len(), 1);
		assert_eq!(total_pages, 0);
		assert_eq!(total_elements, 0);
	}

	#[test]
	fn unpaged_payload_is_a_bare_list() {
		let json = serde_json::json!([{ "tradeId": 7 }, "junk", { "tradeId": 8 }]);

		let SearchPayload::Unpaged(records) = parse_unpaged(json) else {
			panic!("Expected an unpaged payload.");
		};

		// The junk element degrades to an empty record, order preserved.
		assert_eq!(records.len(), 3);
		assert_eq!(records[0].trade_id(), Some(7));
		assert_eq!(records[1].trade_id(), None);
		assert_eq!(records[2].trade_id(), Some(8));
	}

	#[test]
	fn unpaged_non_array_payload_is_empty() {
		assert_eq!(
			parse_unpaged(serde_json::json!({ "unexpected": true })),
			SearchPayload::Unpaged(Vec::new())
		);
	}

	#[test]
	fn endpoint_urls_join_cleanly() {
		assert_eq!(
			endpoint_url("http://localhost:8080/api", "trades/filter"),
			"http://localhost:8080/api/trades/filter"
		);
		assert_eq!(
			endpoint_url("http://localhost:8080/api/", "/trades/rsql"),
			"http://localhost:8080/api/trades/rsql"
		);
	}
}
