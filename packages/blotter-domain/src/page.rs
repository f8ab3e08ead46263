use crate::trade::NormalizedTradeRecord;

/// One page of normalized search results. Unpaginated modes synthesize the
/// metadata (a single page holding everything) so the grid and pager bind to
/// one shape regardless of where the records came from.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
	pub items: Vec<NormalizedTradeRecord>,
	pub total_pages: u32,
	pub total_elements: u64,
	pub current_page: u32,
}
