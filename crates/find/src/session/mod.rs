//! The command surface a host binds its find bar to.
//!
//! A [`FindSession`] holds what the user typed and toggled, the compiled
//! pattern for it, and the visible navigation state. It holds no document
//! text or positions: each command borrows the host, reads the current
//! selection and text, acts, and hands the host back.

use seek_primitives::offset::char_len;
use seek_primitives::{Range, SeqDirection};
use tracing::{debug, warn};

use crate::config::FindConfig;
use crate::error::PatternError;
use crate::host::{FindEvent, FindHost};
use crate::locate::{Located, locate};
use crate::options::SearchOptions;
use crate::pattern::CompiledPattern;
use crate::replace::{self, ReplaceAllReport};
use crate::select::{self, SearchOutcome};
use crate::state::NavState;


/// Find/replace state for one find bar.
#[derive(Debug)]
pub struct FindSession {
	config: FindConfig,
	query: String,
	replacement: String,
	options: SearchOptions,
	compiled: Option<CompiledPattern>,
	state: NavState,
}

impl Default for FindSession {
	fn default() -> Self {
		Self::new(FindConfig::default())
	}
}

impl FindSession {
	/// Creates a session with the configured default options and an empty query.
	pub fn new(config: FindConfig) -> Self {
		Self {
			options: config.default_options,
			config,
			query: String::new(),
			replacement: String::new(),
			compiled: None,
			state: NavState::Idle,
		}
	}

	pub fn config(&self) -> &FindConfig {
		&self.config
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn replacement(&self) -> &str {
		&self.replacement
	}

	pub fn options(&self) -> SearchOptions {
		self.options
	}

	pub fn state(&self) -> NavState {
		self.state
	}

	/// Replaces the query. A change drops the compiled pattern and clears indicators.
	pub fn set_query(&mut self, host: &mut impl FindHost, query: impl Into<String>) {
		let query = query.into();
		if query == self.query {
			return;
		}
		self.query = query;
		self.invalidate(host);
	}

	/// Replaces the options. A change drops the compiled pattern and clears indicators.
	pub fn set_options(&mut self, host: &mut impl FindHost, options: SearchOptions) {
		if options == self.options {
			return;
		}
		self.options = options;
		self.invalidate(host);
	}

	/// Sets the text inserted by replace commands. Inserted literally.
	pub fn set_replacement(&mut self, replacement: impl Into<String>) {
		self.replacement = replacement.into();
	}

	/// Uses the selected text as the new query.
	///
	/// Returns `false` and leaves the query alone when the selection is empty.
	pub fn seed_from_selection(&mut self, host: &mut impl FindHost) -> bool {
		let selection = host.selection();
		if selection.is_empty() {
			return false;
		}
		let selected: String = host
			.text()
			.chars()
			.skip(selection.min())
			.take(selection.len())
			.collect();
		self.set_query(host, selected);
		true
	}

	/// Returns the pattern for the current query and options, compiling it if needed.
	pub fn compile(&mut self) -> Result<&CompiledPattern, PatternError> {
		let compiled = match self.compiled.take() {
			Some(pattern) if pattern.is_for(&self.query, self.options) => pattern,
			_ => CompiledPattern::compile(&self.query, self.options)?,
		};
		Ok(self.compiled.insert(compiled))
	}

	/// Selects the next match after the current selection.
	pub fn find_next(&mut self, host: &mut impl FindHost) -> Result<SearchOutcome, PatternError> {
		self.navigate(host, SeqDirection::Next)
	}

	/// Selects the closest match before the current selection.
	pub fn find_previous(
		&mut self,
		host: &mut impl FindHost,
	) -> Result<SearchOutcome, PatternError> {
		self.navigate(host, SeqDirection::Prev)
	}

	/// Replaces the selection if it is a live match, otherwise selects one.
	///
	/// Returns whether the document was edited.
	pub fn replace_one(&mut self, host: &mut impl FindHost) -> Result<bool, PatternError> {
		let Some(pattern) = self.pattern_for_command(host)? else {
			return Ok(false);
		};
		self.state = self.state.begin_search();
		let report = replace::replace_one(host, &pattern, &self.replacement, self.config.wrap_around);
		self.state = self.state.finish(&report.selected);
		Ok(report.replaced)
	}

	/// Replaces every match as one undo step and returns the count.
	pub fn replace_all(&mut self, host: &mut impl FindHost) -> Result<usize, PatternError> {
		self.replace_all_until(host, || false).map(|report| report.replaced)
	}

	/// Like [`replace_all`](Self::replace_all) with cooperative cancellation.
	pub fn replace_all_until(
		&mut self,
		host: &mut impl FindHost,
		should_stop: impl FnMut() -> bool,
	) -> Result<ReplaceAllReport, PatternError> {
		let Some(pattern) = self.pattern_for_command(host)? else {
			return Ok(ReplaceAllReport::default());
		};
		let report = replace::replace_all_until(host, &pattern, &self.replacement, should_stop);
		self.state = self.state.reset();
		Ok(report)
	}

	fn navigate(
		&mut self,
		host: &mut impl FindHost,
		direction: SeqDirection,
	) -> Result<SearchOutcome, PatternError> {
		let Some(pattern) = self.pattern_for_command(host)? else {
			return Ok(SearchOutcome::NoQuery);
		};
		self.state = self.state.begin_search();
		let selection = host.selection();
		let located = {
			let text = host.text();
			navigation_locate(&text, &pattern, selection, direction, self.config.wrap_around)
		};
		let outcome = select::present(host, located);
		self.state = self.state.finish(&outcome);
		debug!(?direction, ?outcome, state = ?self.state, "navigate");
		Ok(outcome)
	}

	/// Compiles for a command, reporting empty queries and bad patterns to the host.
	fn pattern_for_command(
		&mut self,
		host: &mut impl FindHost,
	) -> Result<Option<CompiledPattern>, PatternError> {
		if self.query.is_empty() {
			host.notify(FindEvent::NoQuery);
			return Ok(None);
		}
		match self.compile() {
			Ok(pattern) => Ok(Some(pattern.clone())),
			Err(err) => {
				warn!(query = %self.query, error = %err, "pattern failed to compile");
				self.state = self.state.reset();
				host.notify(FindEvent::PatternError(err.message.clone()));
				Err(err)
			}
		}
	}

	fn invalidate(&mut self, host: &mut impl FindHost) {
		self.compiled = None;
		self.state = self.state.reset();
		select::options_or_pattern_changed(host);
	}
}

/// Chooses the locate origin for a navigation command.
///
/// Forward search starts at the cursor when nothing is selected, and one
/// past the selection start otherwise, so the current match is never picked
/// again. An empty match sitting exactly on an empty selection is stepped
/// over the same way. Backward search starts at the selection start.
fn navigation_locate(
	text: &str,
	pattern: &CompiledPattern,
	selection: Range,
	direction: SeqDirection,
	wrap: bool,
) -> Located {
	if direction == SeqDirection::Prev {
		return locate(text, pattern, selection.min(), direction, wrap);
	}

	let origin = if selection.is_empty() {
		selection.head
	} else {
		selection.min() + 1
	};
	let located = locate(text, pattern, origin, direction, wrap);
	match located.found {
		Some(m) if selection.is_empty() && m.is_empty() && m.start == selection.head => {
			step_past(text, pattern, origin, wrap)
		}
		_ => located,
	}
}

fn step_past(text: &str, pattern: &CompiledPattern, origin: usize, wrap: bool) -> Located {
	if origin < char_len(text) {
		return locate(text, pattern, origin + 1, SeqDirection::Next, wrap);
	}
	if !wrap {
		return Located::default();
	}
	let restart = locate(text, pattern, 0, SeqDirection::Next, false);
	Located {
		found: restart.found,
		wrapped: restart.found.is_some(),
	}
}
