//! Engine configuration.
//!
//! ```toml
//! wrap-around = false
//!
//! [default-options]
//! match-case = true
//! whole-word = false
//! use-regex = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::options::SearchOptions;

/// Settings a [`FindSession`](crate::FindSession) starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FindConfig {
	/// Continue from the opposite end of the document when a search runs off one end.
	pub wrap_around: bool,
	/// Options a new session starts with.
	pub default_options: SearchOptions,
}

impl Default for FindConfig {
	fn default() -> Self {
		Self {
			wrap_around: true,
			default_options: SearchOptions::default(),
		}
	}
}

impl FindConfig {
	/// Parses a configuration from TOML text. Missing keys take their defaults.
	pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	/// Reads and parses a configuration file.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml(&input)?;
		debug!(path = %path.display(), ?config, "loaded find config");
		Ok(config)
	}
}
