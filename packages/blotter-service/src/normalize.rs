use blotter_domain::{PageResult, settlement};
use blotter_providers::trades::SearchPayload;

/// Reconciles the per-mode response shapes into one [`PageResult`], deriving
/// the settlement-instruction field on every record. Backend order is
/// preserved; unpaged payloads become a single synthetic page.
pub fn normalize(payload: SearchPayload, requested_page: u32) -> PageResult {
	match payload {
		SearchPayload::Paged { content, total_pages, total_elements } => PageResult {
			items: content.into_iter().map(settlement::normalize_trade).collect(),
			total_pages,
			total_elements,
			current_page: requested_page,
		},
		SearchPayload::Unpaged(records) => {
			let items: Vec<_> = records.into_iter().map(settlement::normalize_trade).collect();

			PageResult {
				total_pages: 1,
				total_elements: items.len() as u64,
				current_page: 0,
				items,
			}
		},
	}
}
