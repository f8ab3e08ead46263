mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Service, TradeService};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.trade_service.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "trade_service.api_base must be non-empty.".to_string(),
		});
	}
	if cfg.trade_service.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "trade_service.timeout_ms must be greater than zero.".to_string(),
		});
	}

	for (key, value) in &cfg.trade_service.default_headers {
		if !value.is_string() {
			return Err(Error::Validation {
				message: format!("trade_service.default_headers.{key} must be a string."),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let api_base = cfg.trade_service.api_base.trim().trim_end_matches('/');

	if api_base.len() != cfg.trade_service.api_base.len() {
		cfg.trade_service.api_base = api_base.to_string();
	}
}
