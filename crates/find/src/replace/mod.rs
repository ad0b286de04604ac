//! Guarded single replacement and atomic replace-all.
//!
//! Both operations edit the document while still searching it, so every
//! locate reads the host's current text. Offsets computed before an edit are
//! never reused after it.

use seek_primitives::offset::char_len;
use seek_primitives::{CharIdx, Range, SeqDirection};
use tracing::debug;

use crate::host::{FindHost, with_user_action};
use crate::locate::{Located, Match, locate};
use crate::pattern::CompiledPattern;
use crate::select::{self, SearchOutcome};


/// Result of [`replace_one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOneReport {
	/// Whether the selection was a live match and got replaced.
	pub replaced: bool,
	/// What ended up selected afterwards.
	pub selected: SearchOutcome,
}

/// Result of [`replace_all_until`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaceAllReport {
	/// Number of replacements performed.
	pub replaced: usize,
	/// Whether the cursor went back to where it was before the run.
	pub cursor_restored: bool,
	/// Whether the run stopped early on request.
	pub cancelled: bool,
}

/// Returns the located match only if it covers exactly the selection.
///
/// This guard is what keeps arbitrary selected text from being replaced:
/// the selection must already be the match the engine would find there.
pub fn live_match(selection: Range, located: &Located) -> Option<Match> {
	located
		.found
		.filter(|m| selection.same_span(&m.range()))
}

/// Replaces the selection if it is a live match, then selects the next match.
///
/// The guard locates forward from the start of the selection. When the
/// selection is not exactly that match, nothing is edited and the located
/// match is selected instead so a second call can replace it.
pub fn replace_one(
	host: &mut impl FindHost,
	pattern: &CompiledPattern,
	replacement: &str,
	wrap: bool,
) -> ReplaceOneReport {
	let selection = host.selection();
	let located = {
		let text = host.text();
		locate(&text, pattern, selection.min(), SeqDirection::Next, wrap)
	};

	let Some(m) = live_match(selection, &located) else {
		debug!(?selection, found = ?located.found, "replace skipped: selection is not a live match");
		let selected = select::present(host, located);
		return ReplaceOneReport {
			replaced: false,
			selected,
		};
	};

	let selected = with_user_action(host, |host| {
		let cursor = splice(host, m, replacement);
		host.set_selection(Range::point(cursor));
		let next = {
			let text = host.text();
			locate(&text, pattern, cursor, SeqDirection::Next, wrap)
		};
		select::present(host, next)
	});
	debug!(start = m.start, end = m.end, next = ?selected.matched(), "replaced one match");

	ReplaceOneReport {
		replaced: true,
		selected,
	}
}

/// Replaces every match from the start of the document as one undo step.
///
/// Returns the number of replacements; zero is not an error.
pub fn replace_all(host: &mut impl FindHost, pattern: &CompiledPattern, replacement: &str) -> usize {
	replace_all_until(host, pattern, replacement, || false).replaced
}

/// Like [`replace_all`], polling `should_stop` before each replacement.
///
/// Replacements made before a stop stay inside the single undo group. The
/// cursor is restored through a host anchor; if the text around it was
/// replaced away, it lands at the end of the document instead.
pub fn replace_all_until(
	host: &mut impl FindHost,
	pattern: &CompiledPattern,
	replacement: &str,
	mut should_stop: impl FnMut() -> bool,
) -> ReplaceAllReport {
	let mut report = ReplaceAllReport::default();
	let saved = host.create_anchor(host.selection().head);

	with_user_action(host, |host| {
		let mut scan: CharIdx = 0;
		while scan <= host.len_chars() {
			if should_stop() {
				report.cancelled = true;
				break;
			}
			let found = {
				let text = host.text();
				locate(&text, pattern, scan, SeqDirection::Next, false).found
			};
			let Some(m) = found else { break };

			let end = splice(host, m, replacement);
			report.replaced += 1;
			// An empty match must not be found again at the same place.
			scan = if m.is_empty() { end + 1 } else { end };
		}
	});

	let anchor = host.anchor(saved);
	host.destroy_anchor(saved);
	if anchor.invalidated {
		let end = host.len_chars();
		host.set_selection(Range::point(end));
	} else {
		host.set_selection(Range::point(anchor.position));
		select::reveal_cursor(host, anchor.position);
		report.cursor_restored = true;
	}

	debug!(
		replaced = report.replaced,
		cursor_restored = report.cursor_restored,
		cancelled = report.cancelled,
		zero_width = pattern.matches_empty(),
		"replace-all finished"
	);
	report
}

/// Swaps the matched text for `replacement`, returning the end of the insertion.
fn splice(host: &mut impl FindHost, m: Match, replacement: &str) -> CharIdx {
	host.delete(m.start, m.end);
	host.insert(m.start, replacement);
	m.start + char_len(replacement)
}
