//! The engine against a minimal host written outside the crate.

use std::borrow::Cow;

use pretty_assertions::assert_eq;
use seek_find::{
	Anchor, AnchorId, CompiledPattern, FindEvent, FindHost, SearchOptions, replace_all, replace_one,
};
use seek_primitives::{CharIdx, CharLen, Range};

/// A `Vec<char>` document that records how edits were grouped.
#[derive(Default)]
struct CharHost {
	chars: Vec<char>,
	selection: Range,
	anchors: Vec<Option<Anchor>>,
	depth: usize,
	actions: usize,
	events: Vec<FindEvent>,
}

impl CharHost {
	fn new(text: &str) -> Self {
		Self {
			chars: text.chars().collect(),
			..Self::default()
		}
	}

	fn string(&self) -> String {
		self.chars.iter().collect()
	}
}

impl FindHost for CharHost {
	fn text(&self) -> Cow<'_, str> {
		Cow::Owned(self.string())
	}

	fn len_chars(&self) -> CharLen {
		self.chars.len()
	}

	fn selection(&self) -> Range {
		self.selection
	}

	fn set_selection(&mut self, selection: Range) {
		self.selection = selection;
	}

	fn delete(&mut self, start: CharIdx, end: CharIdx) {
		assert!(self.depth > 0, "edits must happen inside a user action");
		self.chars.drain(start..end);
		for anchor in self.anchors.iter_mut().flatten() {
			if anchor.position >= end {
				anchor.position -= end - start;
			} else if anchor.position > start {
				anchor.position = start;
				anchor.invalidated = true;
			}
		}
	}

	fn insert(&mut self, pos: CharIdx, text: &str) {
		assert!(self.depth > 0, "edits must happen inside a user action");
		let len = text.chars().count();
		self.chars.splice(pos..pos, text.chars());
		for anchor in self.anchors.iter_mut().flatten() {
			if anchor.position > pos {
				anchor.position += len;
			}
		}
	}

	fn begin_user_action(&mut self) {
		if self.depth == 0 {
			self.actions += 1;
		}
		self.depth += 1;
	}

	fn end_user_action(&mut self) {
		self.depth -= 1;
	}

	fn create_anchor(&mut self, pos: CharIdx) -> AnchorId {
		self.anchors.push(Some(Anchor::new(pos)));
		AnchorId::new(self.anchors.len() - 1)
	}

	fn anchor(&self, id: AnchorId) -> Anchor {
		self.anchors
			.get(id.key())
			.copied()
			.flatten()
			.unwrap_or(Anchor {
				position: 0,
				invalidated: true,
			})
	}

	fn destroy_anchor(&mut self, id: AnchorId) {
		if let Some(slot) = self.anchors.get_mut(id.key()) {
			*slot = None;
		}
	}

	fn notify(&mut self, event: FindEvent) {
		self.events.push(event);
	}
}

#[test]
fn replace_all_is_one_user_action_with_anchor_cleanup() {
	let mut host = CharHost::new("tab\ttab\ttab");
	host.selection = Range::point(4);
	let pattern = CompiledPattern::compile("\t", SearchOptions::literal()).unwrap();

	assert_eq!(replace_all(&mut host, &pattern, "    "), 2);
	assert_eq!(host.string(), "tab    tab    tab");
	assert_eq!(host.actions, 1);
	assert_eq!(host.depth, 0);
	assert!(host.anchors.iter().all(Option::is_none));
	// Text inserted at the anchor lands after it.
	assert_eq!(host.selection, Range::point(3));
}

#[test]
fn replace_one_edits_inside_a_single_action() {
	let mut host = CharHost::new("x = 1; x = 2;");
	host.selection = Range::new(0, 1);
	let pattern = CompiledPattern::compile("x", SearchOptions::literal()).unwrap();

	let report = replace_one(&mut host, &pattern, "y", true);
	assert!(report.replaced);
	assert_eq!(host.string(), "y = 1; x = 2;");
	assert_eq!(host.actions, 1);
	assert_eq!(host.selection, Range::new(7, 8));
	assert!(host.events.contains(&FindEvent::Matched(seek_find::Match::new(7, 8))));
}

#[test]
fn stale_selection_never_opens_an_action() {
	let mut host = CharHost::new("x = 1; x = 2;");
	host.selection = Range::new(2, 3);
	let pattern = CompiledPattern::compile("x", SearchOptions::literal()).unwrap();

	let report = replace_one(&mut host, &pattern, "y", true);
	assert!(!report.replaced);
	assert_eq!(host.actions, 0);
	assert_eq!(host.selection, Range::new(7, 8));
}
