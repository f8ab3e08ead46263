/// Fixed-field search criteria for structured mode. Empty string means the
/// field was not entered; whether an entered value actually travels is the
/// query builder's call, not this type's.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
	pub book: String,
	pub counterparty: String,
	pub trader: String,
	pub trade_status: String,
	pub start_date: String,
	pub end_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaField {
	Book,
	Counterparty,
	Trader,
	TradeStatus,
	StartDate,
	EndDate,
}

impl SearchCriteria {
	pub fn set(&mut self, field: CriteriaField, value: impl Into<String>) {
		let slot = match field {
			CriteriaField::Book => &mut self.book,
			CriteriaField::Counterparty => &mut self.counterparty,
			CriteriaField::Trader => &mut self.trader,
			CriteriaField::TradeStatus => &mut self.trade_status,
			CriteriaField::StartDate => &mut self.start_date,
			CriteriaField::EndDate => &mut self.end_date,
		};

		*slot = value.into();
	}
}
