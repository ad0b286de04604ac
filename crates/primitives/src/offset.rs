//! Character/byte offset conversion for UTF-8 text.
//!
//! Positions are character offsets everywhere in the seek crates, while the
//! regex engine reports byte offsets. These helpers translate between the two.

use crate::range::{CharIdx, CharLen};

/// Converts a character offset to a byte offset, clamping to the end of `s`.
pub fn char_to_byte(s: &str, char_idx: CharIdx) -> usize {
	s.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(s.len())
}

/// Returns the length of `s` in characters.
#[inline]
pub fn char_len(s: &str) -> CharLen {
	s.chars().count()
}

/// Incremental byte-to-char converter over a single text.
///
/// Converting a sequence of non-decreasing byte offsets costs one pass over
/// the text in total. A smaller offset than the previous one restarts the
/// count from the beginning.
#[derive(Debug, Clone)]
pub struct CharOffsets<'a> {
	text: &'a str,
	ascii: bool,
	byte: usize,
	char: CharIdx,
}

impl<'a> CharOffsets<'a> {
	/// Creates a converter positioned at the start of `text`.
	pub fn new(text: &'a str) -> Self {
		Self {
			text,
			ascii: text.is_ascii(),
			byte: 0,
			char: 0,
		}
	}

	/// Returns the character offset of `byte_idx`.
	pub fn char_at(&mut self, byte_idx: usize) -> CharIdx {
		if self.ascii {
			return byte_idx;
		}
		if byte_idx < self.byte {
			self.byte = 0;
			self.char = 0;
		}
		self.char += self.text[self.byte..byte_idx].chars().count();
		self.byte = byte_idx;
		self.char
	}

	/// Returns the byte offset of `char_idx`, clamped to the end of the text.
	pub fn byte_at(&self, char_idx: CharIdx) -> usize {
		if self.ascii {
			return char_idx.min(self.text.len());
		}
		char_to_byte(self.text, char_idx)
	}
}
