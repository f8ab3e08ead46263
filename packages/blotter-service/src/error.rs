pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{message}")]
	Validation { message: String },
	#[error("{message}")]
	Transport { message: String },
	#[error("Trade {id} was not found.")]
	NotFound { id: i64 },
}
impl From<blotter_providers::Error> for Error {
	fn from(err: blotter_providers::Error) -> Self {
		match err {
			blotter_providers::Error::EmptyQuery { message } => Self::Validation { message },
			blotter_providers::Error::TradeNotFound { id } => Self::NotFound { id },
			err => Self::Transport { message: err.to_string() },
		}
	}
}
