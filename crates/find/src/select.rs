//! Mapping locate results onto the host selection and feedback signals.

use seek_primitives::{CharIdx, Range};

use crate::host::{FindEvent, FindHost};
use crate::locate::{Located, Match};

/// What a navigation command ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
	/// A match was selected without crossing the document boundary.
	Found(Match),
	/// A match was selected after wrapping around.
	Wrapped(Match),
	/// Nothing matched.
	NotFound,
	/// The query was empty, so no search ran.
	NoQuery,
}

impl SearchOutcome {
	/// Returns the selected match, if any.
	pub fn matched(&self) -> Option<Match> {
		match self {
			Self::Found(m) | Self::Wrapped(m) => Some(*m),
			Self::NotFound | Self::NoQuery => None,
		}
	}
}

/// Selects `m` and asks the host to bring it into view.
pub fn apply_match(host: &mut impl FindHost, m: Match) {
	host.set_selection(m.range());
	host.notify(FindEvent::Matched(m));
	host.notify(FindEvent::Reveal(m.range()));
}

/// Reports a miss. Collapses the selection onto its cursor; the text is untouched.
pub fn no_match_feedback(host: &mut impl FindHost) {
	let collapsed = host.selection().collapse();
	host.set_selection(collapsed);
	host.notify(FindEvent::NotFound);
}

/// Reports that the last search crossed the document boundary.
pub fn wrapped_feedback(host: &mut impl FindHost) {
	host.notify(FindEvent::Wrapped);
}

/// Tells the host to drop indicators that belong to a stale query.
pub fn options_or_pattern_changed(host: &mut impl FindHost) {
	host.notify(FindEvent::IndicatorsCleared);
}

/// Applies a locate result to the host and classifies it.
pub fn present(host: &mut impl FindHost, located: Located) -> SearchOutcome {
	match located.found {
		Some(m) => {
			if located.wrapped {
				wrapped_feedback(host);
			}
			apply_match(host, m);
			if located.wrapped {
				SearchOutcome::Wrapped(m)
			} else {
				SearchOutcome::Found(m)
			}
		}
		None => {
			no_match_feedback(host);
			SearchOutcome::NotFound
		}
	}
}

/// Requests visibility of a plain cursor position.
pub(crate) fn reveal_cursor(host: &mut impl FindHost, pos: CharIdx) {
	host.notify(FindEvent::Reveal(Range::point(pos)));
}
