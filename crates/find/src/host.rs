//! The seam between the engine and the editing surface that owns the document.
//!
//! The engine borrows a [`FindHost`] for one call at a time and never keeps
//! text or positions across calls; the host may edit the document freely in
//! between.

use std::borrow::Cow;

use seek_primitives::{CharIdx, CharLen, Range};

use crate::locate::Match;

/// Opaque handle to a position tracked by the host across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorId(usize);

impl AnchorId {
	/// Wraps a host-specific key.
	pub fn new(key: usize) -> Self {
		Self(key)
	}

	/// Returns the host-specific key.
	pub fn key(self) -> usize {
		self.0
	}
}

/// Snapshot of an anchor's state.
///
/// The host shifts `position` as text is inserted or deleted before it. Once
/// a deletion swallows the anchor, `invalidated` is set and never clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
	/// Current character offset of the anchor.
	pub position: CharIdx,
	/// Set once a deletion has enclosed the anchor.
	pub invalidated: bool,
}

impl Anchor {
	/// Creates a valid anchor at `position`.
	pub fn new(position: CharIdx) -> Self {
		Self {
			position,
			invalidated: false,
		}
	}
}

/// Feedback emitted by the engine for the host to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindEvent {
	/// A match was selected.
	Matched(Match),
	/// The search found nothing.
	NotFound,
	/// The last search crossed the start or end of the document.
	Wrapped,
	/// Query or options changed; stale match indicators should go.
	IndicatorsCleared,
	/// Advisory request to scroll the range into view.
	Reveal(Range),
	/// The query failed to compile; carries the engine's message verbatim.
	PatternError(String),
	/// A search was requested with an empty query.
	NoQuery,
}

/// Document access and feedback signals the engine needs from its host.
///
/// Edits are assumed to succeed once issued. Selection placement after an
/// edit is up to the host; the engine sets the selection explicitly whenever
/// it cares about it.
pub trait FindHost {
	/// Returns the full current text.
	fn text(&self) -> Cow<'_, str>;

	/// Returns the document length in characters.
	fn len_chars(&self) -> CharLen;

	/// Returns the current selection.
	fn selection(&self) -> Range;

	/// Replaces the current selection.
	fn set_selection(&mut self, selection: Range);

	/// Deletes the characters in `[start, end)`.
	fn delete(&mut self, start: CharIdx, end: CharIdx);

	/// Inserts `text` at `pos`.
	fn insert(&mut self, pos: CharIdx, text: &str);

	/// Opens an undo group. Groups nest; only the outermost pair counts.
	fn begin_user_action(&mut self);

	/// Closes the innermost open undo group.
	fn end_user_action(&mut self);

	/// Starts tracking `pos` across edits.
	fn create_anchor(&mut self, pos: CharIdx) -> AnchorId;

	/// Returns the current state of an anchor.
	fn anchor(&self, id: AnchorId) -> Anchor;

	/// Stops tracking an anchor.
	fn destroy_anchor(&mut self, id: AnchorId);

	/// Delivers a feedback signal.
	fn notify(&mut self, event: FindEvent);
}

/// Runs `f` inside one undo group on `host`.
pub fn with_user_action<H, R>(host: &mut H, f: impl FnOnce(&mut H) -> R) -> R
where
	H: FindHost,
{
	host.begin_user_action();
	let result = f(host);
	host.end_user_action();
	result
}
