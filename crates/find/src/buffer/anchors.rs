use slab::Slab;

use crate::host::{Anchor, AnchorId};

/// Registry of anchors that follow the text as it is edited.
///
/// Anchors have left gravity: text inserted exactly at an anchor goes after
/// it. A deletion that strictly encloses an anchor invalidates it and parks
/// it at the deletion start.
#[derive(Debug, Default)]
pub(crate) struct AnchorSet {
	slots: Slab<Anchor>,
}

impl AnchorSet {
	pub(crate) fn create(&mut self, pos: usize) -> AnchorId {
		AnchorId::new(self.slots.insert(Anchor::new(pos)))
	}

	/// Unknown or destroyed anchors report as invalidated.
	pub(crate) fn get(&self, id: AnchorId) -> Anchor {
		self.slots.get(id.key()).copied().unwrap_or(Anchor {
			position: 0,
			invalidated: true,
		})
	}

	pub(crate) fn remove(&mut self, id: AnchorId) {
		self.slots.try_remove(id.key());
	}

	pub(crate) fn len(&self) -> usize {
		self.slots.len()
	}

	pub(crate) fn shift_for_insert(&mut self, at: usize, len: usize) {
		for (_, anchor) in self.slots.iter_mut() {
			if anchor.position > at {
				anchor.position += len;
			}
		}
	}

	pub(crate) fn shift_for_delete(&mut self, start: usize, end: usize) {
		for (_, anchor) in self.slots.iter_mut() {
			if anchor.position >= end {
				anchor.position -= end - start;
			} else if anchor.position > start {
				anchor.position = start;
				anchor.invalidated = true;
			}
		}
	}
}
