/// A position in the text, measured in characters (not bytes).
///
/// This is the canonical coordinate space for every seek crate.
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
///
/// Kept distinct from [`CharIdx`] so lengths and positions are not mixed up
/// at call sites.
pub type CharLen = usize;

/// A text range defined by anchor and head positions.
///
/// The anchor is the fixed end and the head is the cursor. A range with
/// `anchor == head` is an empty selection, i.e. a plain cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
	/// The fixed end of the range.
	pub anchor: CharIdx,
	/// The moving end of the range (cursor position).
	pub head: CharIdx,
}

impl Range {
	/// Creates a new range from anchor to head.
	pub fn new(anchor: CharIdx, head: CharIdx) -> Self {
		Self { anchor, head }
	}

	/// Creates a zero-width range (cursor) at the given position.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	/// Returns the smaller of anchor and head.
	#[inline]
	pub fn min(&self) -> CharIdx {
		std::cmp::min(self.anchor, self.head)
	}

	/// Returns the larger of anchor and head.
	#[inline]
	pub fn max(&self) -> CharIdx {
		std::cmp::max(self.anchor, self.head)
	}

	/// Returns the ordered `(start, end)` bounds regardless of direction.
	#[inline]
	pub fn bounds(&self) -> (CharIdx, CharIdx) {
		(self.min(), self.max())
	}

	/// Returns the length of the range in characters.
	#[inline]
	pub fn len(&self) -> CharLen {
		self.max() - self.min()
	}

	/// Returns true if anchor equals head (zero-width cursor).
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.head
	}

	/// Applies a function to both anchor and head.
	pub fn map(self, mut f: impl FnMut(CharIdx) -> CharIdx) -> Self {
		Self {
			anchor: f(self.anchor),
			head: f(self.head),
		}
	}

	/// Collapses the range onto its head.
	pub fn collapse(&self) -> Self {
		Self::point(self.head)
	}

	/// Returns true if both ranges cover the same span, ignoring direction.
	pub fn same_span(&self, other: &Range) -> bool {
		self.bounds() == other.bounds()
	}

	/// Clamps anchor and head to `[0, max_char]`.
	pub fn clamp(&self, max_char: CharIdx) -> Self {
		Self {
			anchor: self.anchor.min(max_char),
			head: self.head.min(max_char),
		}
	}
}

impl Default for Range {
	fn default() -> Self {
		Self::point(0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_range_basics() {
		let r = Range::new(5, 10);
		assert_eq!(r.min(), 5);
		assert_eq!(r.max(), 10);
		assert_eq!(r.len(), 5);
		assert!(!r.is_empty());
	}

	#[test]
	fn test_backward_range_bounds() {
		let r = Range::new(10, 5);
		assert_eq!(r.bounds(), (5, 10));
		assert!(r.same_span(&Range::new(5, 10)));
		assert!(!r.same_span(&Range::new(5, 9)));
	}

	#[test]
	fn test_point_is_empty() {
		let r = Range::point(3);
		assert!(r.is_empty());
		assert_eq!(r.len(), 0);
	}

	#[test]
	fn test_collapse_keeps_head() {
		assert_eq!(Range::new(2, 7).collapse(), Range::point(7));
		assert_eq!(Range::new(7, 2).collapse(), Range::point(2));
	}

	#[test]
	fn test_map_applies_to_both_ends() {
		assert_eq!(Range::new(2, 7).map(|pos| pos * 2), Range::new(4, 14));
	}

	#[test]
	fn test_clamp() {
		assert_eq!(Range::new(4, 20).clamp(8), Range::new(4, 8));
	}
}
