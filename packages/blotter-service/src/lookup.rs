use blotter_domain::{NormalizedTradeRecord, settlement, trade};

use crate::{Result, SearchController};

impl SearchController {
	/// Fetches a single trade by id and applies the display conventions the
	/// search paths share: date attributes truncated to `YYYY-MM-DD`, legs
	/// forced into the shape the editor expects, settlement instructions
	/// derived. Lookup does not touch search state; failures surface to the
	/// caller directly.
	pub async fn trade(&self, id: i64) -> Result<NormalizedTradeRecord> {
		let mut record = self.source.lookup(&self.cfg.trade_service, id).await?;

		trade::truncate_date_fields(&mut record);
		trade::default_leg_shapes(&mut record);

		Ok(settlement::normalize_trade(record))
	}
}
