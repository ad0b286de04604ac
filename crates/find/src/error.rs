//! Error types for pattern compilation and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// A search pattern that failed to compile.
///
/// Only reachable with regex matching enabled, since literal patterns are
/// escaped before compilation. The message is the regex engine's own report
/// and is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PatternError {
	/// Human-readable description from the regex engine.
	pub message: String,
}

impl From<regex::Error> for PatternError {
	fn from(err: regex::Error) -> Self {
		Self {
			message: err.to_string(),
		}
	}
}

/// Errors that can occur when loading a [`FindConfig`](crate::FindConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unknown/mistyped key.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}
