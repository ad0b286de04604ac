//! Grouped undo history for [`TextBuffer`](super::TextBuffer).
//!
//! Edits recorded while a user action is open are collected into one group,
//! so a whole replace-all is undone in a single step. Edits recorded outside
//! any action form a group of their own.

use seek_primitives::Range;
use tracing::trace;

/// A single primitive edit, carrying enough text to be inverted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Edit {
	Insert { at: usize, text: String },
	Delete { at: usize, text: String },
}

impl Edit {
	pub(crate) fn invert(&self) -> Edit {
		match self {
			Edit::Insert { at, text } => Edit::Delete {
				at: *at,
				text: text.clone(),
			},
			Edit::Delete { at, text } => Edit::Insert {
				at: *at,
				text: text.clone(),
			},
		}
	}
}

/// Edits undone and redone together, with the selections around them.
#[derive(Debug, Clone)]
pub(crate) struct UndoGroup {
	pub(crate) edits: Vec<Edit>,
	pub(crate) selection_before: Range,
	pub(crate) selection_after: Range,
}

impl UndoGroup {
	fn new(selection: Range) -> Self {
		Self {
			edits: Vec::new(),
			selection_before: selection,
			selection_after: selection,
		}
	}
}

#[derive(Debug, Default)]
pub(crate) struct UndoLog {
	undo_stack: Vec<UndoGroup>,
	redo_stack: Vec<UndoGroup>,
	open: Option<UndoGroup>,
	depth: usize,
}

impl UndoLog {
	pub(crate) fn begin(&mut self, selection: Range) {
		if self.depth == 0 {
			self.open = Some(UndoGroup::new(selection));
		}
		self.depth += 1;
	}

	pub(crate) fn end(&mut self, selection: Range) {
		if self.depth == 0 {
			trace!("end_user_action without matching begin");
			return;
		}
		self.depth -= 1;
		if self.depth > 0 {
			return;
		}
		if let Some(mut group) = self.open.take()
			&& !group.edits.is_empty()
		{
			group.selection_after = selection;
			self.push(group);
		}
	}

	pub(crate) fn record(&mut self, edit: Edit, selection: Range) {
		match self.open.as_mut() {
			Some(group) => group.edits.push(edit),
			None => {
				let mut group = UndoGroup::new(selection);
				group.edits.push(edit);
				self.push(group);
			}
		}
	}

	fn push(&mut self, group: UndoGroup) {
		trace!(
			edits = group.edits.len(),
			undo_stack = self.undo_stack.len() + 1,
			"undo group pushed"
		);
		self.undo_stack.push(group);
		if !self.redo_stack.is_empty() {
			trace!(cleared = self.redo_stack.len(), "redo stack cleared");
		}
		self.redo_stack.clear();
	}

	pub(crate) fn is_open(&self) -> bool {
		self.depth > 0
	}

	pub(crate) fn pop_undo(&mut self) -> Option<UndoGroup> {
		self.undo_stack.pop()
	}

	pub(crate) fn pop_redo(&mut self) -> Option<UndoGroup> {
		self.redo_stack.pop()
	}

	pub(crate) fn push_undone(&mut self, group: UndoGroup) {
		self.redo_stack.push(group);
	}

	pub(crate) fn push_redone(&mut self, group: UndoGroup) {
		self.undo_stack.push(group);
	}

	pub(crate) fn undo_len(&self) -> usize {
		self.undo_stack.len()
	}

	pub(crate) fn redo_len(&self) -> usize {
		self.redo_stack.len()
	}
}
