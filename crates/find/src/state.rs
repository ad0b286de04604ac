use crate::select::SearchOutcome;

/// Visible navigation state of a find session.
///
/// ```text
/// Idle ──locate──► Searching ──► Found | WrappedFound | NotFound
///                      ▲                    │
///                      └────next locate─────┘
/// any ──query/options change or pattern error──► Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
	/// No search has run since the query or options last changed.
	#[default]
	Idle,
	/// A locate is in progress.
	Searching,
	/// The last locate selected a match.
	Found,
	/// The last locate found nothing.
	NotFound,
	/// The last locate selected a match after wrapping around.
	WrappedFound,
}

impl NavState {
	/// Enters [`NavState::Searching`]. Valid from every state.
	pub fn begin_search(self) -> Self {
		Self::Searching
	}

	/// Leaves [`NavState::Searching`] according to the outcome.
	pub fn finish(self, outcome: &SearchOutcome) -> Self {
		debug_assert_eq!(self, Self::Searching, "finish without begin_search");
		match outcome {
			SearchOutcome::Found(_) => Self::Found,
			SearchOutcome::Wrapped(_) => Self::WrappedFound,
			SearchOutcome::NotFound => Self::NotFound,
			SearchOutcome::NoQuery => Self::Idle,
		}
	}

	/// Returns to [`NavState::Idle`] after a query or option change.
	pub fn reset(self) -> Self {
		Self::Idle
	}

	/// Returns true if a match is currently selected by the session.
	pub fn has_match(self) -> bool {
		matches!(self, Self::Found | Self::WrappedFound)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::locate::Match;

	#[test]
	fn search_cycle() {
		let s = NavState::Idle.begin_search();
		assert_eq!(s, NavState::Searching);
		let s = s.finish(&SearchOutcome::Found(Match::new(0, 1)));
		assert_eq!(s, NavState::Found);
		assert!(s.has_match());

		let s = s.begin_search().finish(&SearchOutcome::Wrapped(Match::new(0, 1)));
		assert_eq!(s, NavState::WrappedFound);

		let s = s.begin_search().finish(&SearchOutcome::NotFound);
		assert_eq!(s, NavState::NotFound);
		assert!(!s.has_match());

		assert_eq!(s.begin_search(), NavState::Searching);
	}

	#[test]
	fn reset_from_any_state() {
		for s in [
			NavState::Idle,
			NavState::Found,
			NavState::NotFound,
			NavState::WrappedFound,
		] {
			assert_eq!(s.reset(), NavState::Idle);
		}
	}
}
