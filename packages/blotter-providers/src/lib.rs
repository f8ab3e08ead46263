pub mod query;
pub mod trades;

mod error;

pub use error::{Error, Result};

use reqwest::header::{HeaderMap, HeaderName};
use serde_json::{Map, Value};

pub fn default_headers(headers: &Map<String, Value>) -> Result<HeaderMap> {
	let mut map = HeaderMap::new();

	for (key, value) in headers {
		let Some(raw) = value.as_str() else {
			return Err(Error::InvalidConfig {
				message: format!("Header {key} values must be strings."),
			});
		};

		map.insert(HeaderName::from_bytes(key.as_bytes())?, raw.parse()?);
	}

	Ok(map)
}
