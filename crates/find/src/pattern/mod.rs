//! Turning a raw query plus [`SearchOptions`] into an immutable matcher.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::error::PatternError;
use crate::options::SearchOptions;

#[cfg(test)]
mod tests;

/// An immutable matcher built from a raw query and the options in effect.
///
/// Never mutated after construction. A change to either the query or the
/// options requires compiling a new pattern; [`is_for`](Self::is_for) tells a
/// cache whether this one is still current.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
	raw: String,
	options: SearchOptions,
	regex: Regex,
}

impl CompiledPattern {
	/// Compiles `raw` under `options`.
	///
	/// Literal queries have every metacharacter escaped, whole-word queries
	/// are bounded by `\b` on both ends, and matching always runs in
	/// multi-line mode.
	pub fn compile(raw: &str, options: SearchOptions) -> Result<Self, PatternError> {
		let source = expression(raw, options);
		let regex = RegexBuilder::new(&source)
			.case_insensitive(!options.match_case)
			.multi_line(true)
			.build()?;
		debug!(raw, source = %source, ?options, "pattern compiled");
		Ok(Self {
			raw: raw.to_owned(),
			options,
			regex,
		})
	}

	/// Returns the query this pattern was compiled from.
	pub fn raw(&self) -> &str {
		&self.raw
	}

	/// Returns the options this pattern was compiled with.
	pub fn options(&self) -> SearchOptions {
		self.options
	}

	/// Returns the underlying regex.
	pub fn regex(&self) -> &Regex {
		&self.regex
	}

	/// Returns true if this pattern was compiled from exactly `raw` and `options`.
	pub fn is_for(&self, raw: &str, options: SearchOptions) -> bool {
		self.raw == raw && self.options == options
	}

	/// Returns true if the pattern matches the empty string on its own.
	pub fn matches_empty(&self) -> bool {
		self.regex.is_match("")
	}
}

/// Builds the regex source for `raw` under `options`.
fn expression(raw: &str, options: SearchOptions) -> String {
	let body = if options.use_regex {
		Cow::Borrowed(raw)
	} else {
		Cow::Owned(regex::escape(raw))
	};
	if options.whole_word {
		format!(r"\b(?:{body})\b")
	} else {
		body.into_owned()
	}
}
