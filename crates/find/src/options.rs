use serde::{Deserialize, Serialize};

/// Flags that shape how a raw query is turned into a matcher.
///
/// Serializable so the host can persist the user's last choice; the engine
/// itself never stores them between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SearchOptions {
	/// Case-sensitive matching. Insensitive when false.
	pub match_case: bool,
	/// Only match whole words.
	pub whole_word: bool,
	/// Interpret the query as a regular expression instead of literal text.
	pub use_regex: bool,
}

impl SearchOptions {
	/// Literal, case-insensitive, substring matching.
	pub const fn literal() -> Self {
		Self {
			match_case: false,
			whole_word: false,
			use_regex: false,
		}
	}

	pub const fn with_match_case(mut self, on: bool) -> Self {
		self.match_case = on;
		self
	}

	pub const fn with_whole_word(mut self, on: bool) -> Self {
		self.whole_word = on;
		self
	}

	pub const fn with_regex(mut self, on: bool) -> Self {
		self.use_regex = on;
		self
	}
}
