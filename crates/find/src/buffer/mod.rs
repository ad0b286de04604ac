//! A rope-backed [`FindHost`] with anchors, grouped undo and an event log.
//!
//! Hosts embedding the engine in a real editor implement [`FindHost`] over
//! their own buffer type. [`TextBuffer`] is the self-contained version used
//! by the command-line driver and the test suite.

mod anchors;
mod undo;


use std::borrow::Cow;
use std::fmt;

use ropey::Rope;
use seek_primitives::offset::char_len;
use seek_primitives::{CharIdx, CharLen, Range};
use tracing::trace;

use self::anchors::AnchorSet;
use self::undo::{Edit, UndoLog};
use crate::host::{Anchor, AnchorId, FindEvent, FindHost};

/// An editable text with a single selection.
///
/// [`FindHost::text`] flattens the rope into a fresh `String` on every call,
/// and replace-all locates once per replacement, so a replace-all costs one
/// copy of the document per match. Callers that only list matches should
/// search one snapshot with [`locate_all`](crate::locate_all) instead.
#[derive(Debug, Default)]
pub struct TextBuffer {
	content: Rope,
	selection: Range,
	anchors: AnchorSet,
	history: UndoLog,
	events: Vec<FindEvent>,
}

impl TextBuffer {
	/// Creates a buffer holding `text` with the cursor at the start.
	pub fn new(text: &str) -> Self {
		Self {
			content: Rope::from_str(text),
			..Self::default()
		}
	}

	/// Returns the buffer with `selection` applied.
	pub fn with_selection(mut self, selection: Range) -> Self {
		self.set_selection(selection);
		self
	}

	/// Returns the underlying rope.
	pub fn content(&self) -> &Rope {
		&self.content
	}

	/// Returns the events received so far.
	pub fn events(&self) -> &[FindEvent] {
		&self.events
	}

	/// Drains and returns the events received so far.
	pub fn take_events(&mut self) -> Vec<FindEvent> {
		std::mem::take(&mut self.events)
	}

	/// Returns the number of anchors still registered.
	pub fn live_anchors(&self) -> usize {
		self.anchors.len()
	}

	/// Returns the number of undo steps available.
	pub fn undo_len(&self) -> usize {
		self.history.undo_len()
	}

	/// Returns the number of redo steps available.
	pub fn redo_len(&self) -> usize {
		self.history.redo_len()
	}

	/// Reverts the most recent undo group, restoring the selection it started with.
	///
	/// Returns `false` if there is nothing to undo or a user action is still open.
	pub fn undo(&mut self) -> bool {
		if self.history.is_open() {
			return false;
		}
		let Some(mut group) = self.history.pop_undo() else {
			trace!("undo: nothing to undo");
			return false;
		};
		group.selection_after = self.selection;
		for edit in group.edits.iter().rev() {
			self.apply(&edit.invert());
		}
		self.selection = group.selection_before.clamp(self.content.len_chars());
		trace!(edits = group.edits.len(), "undo: reverted group");
		self.history.push_undone(group);
		true
	}

	/// Re-applies the most recently undone group.
	pub fn redo(&mut self) -> bool {
		if self.history.is_open() {
			return false;
		}
		let Some(group) = self.history.pop_redo() else {
			trace!("redo: nothing to redo");
			return false;
		};
		for edit in &group.edits {
			self.apply(edit);
		}
		self.selection = group.selection_after.clamp(self.content.len_chars());
		trace!(edits = group.edits.len(), "redo: re-applied group");
		self.history.push_redone(group);
		true
	}

	/// Applies an edit to the text, anchors and selection without recording it.
	fn apply(&mut self, edit: &Edit) {
		match edit {
			Edit::Insert { at, text } => {
				let len = char_len(text);
				self.content.insert(*at, text);
				self.anchors.shift_for_insert(*at, len);
				self.selection = self.selection.map(|pos| if pos >= *at { pos + len } else { pos });
			}
			Edit::Delete { at, text } => {
				let (start, end) = (*at, *at + char_len(text));
				self.content.remove(start..end);
				self.anchors.shift_for_delete(start, end);
				self.selection = self.selection.map(|pos| {
					if pos >= end { pos - (end - start) } else { pos.min(start) }
				});
			}
		}
	}

	fn record(&mut self, edit: Edit) {
		let before = self.selection;
		self.apply(&edit);
		self.history.record(edit, before);
	}
}

impl FindHost for TextBuffer {
	fn text(&self) -> Cow<'_, str> {
		Cow::Owned(self.content.to_string())
	}

	fn len_chars(&self) -> CharLen {
		self.content.len_chars()
	}

	fn selection(&self) -> Range {
		self.selection
	}

	fn set_selection(&mut self, selection: Range) {
		self.selection = selection.clamp(self.content.len_chars());
	}

	fn delete(&mut self, start: CharIdx, end: CharIdx) {
		let len = self.content.len_chars();
		let (start, end) = (start.min(len), end.min(len));
		if start >= end {
			return;
		}
		let text = self.content.slice(start..end).to_string();
		self.record(Edit::Delete { at: start, text });
	}

	fn insert(&mut self, pos: CharIdx, text: &str) {
		if text.is_empty() {
			return;
		}
		let at = pos.min(self.content.len_chars());
		self.record(Edit::Insert {
			at,
			text: text.to_owned(),
		});
	}

	fn begin_user_action(&mut self) {
		self.history.begin(self.selection);
	}

	fn end_user_action(&mut self) {
		self.history.end(self.selection);
	}

	fn create_anchor(&mut self, pos: CharIdx) -> AnchorId {
		self.anchors.create(pos.min(self.content.len_chars()))
	}

	fn anchor(&self, id: AnchorId) -> Anchor {
		self.anchors.get(id)
	}

	fn destroy_anchor(&mut self, id: AnchorId) {
		self.anchors.remove(id);
	}

	fn notify(&mut self, event: FindEvent) {
		trace!(?event, "find event");
		self.events.push(event);
	}
}

impl From<&str> for TextBuffer {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl fmt::Display for TextBuffer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.content, f)
	}
}
