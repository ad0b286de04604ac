//! Finding the next or previous match from a position, with wraparound.
//!
//! Every scan runs over the whole text so that `\b`, `^` and `$` see the
//! real neighbouring characters, and only the candidate set is restricted
//! by position. Positions are characters; the regex engine works in bytes.

use seek_primitives::offset::CharOffsets;
use seek_primitives::{CharIdx, CharLen, Range, SeqDirection};
use tracing::trace;

use crate::pattern::CompiledPattern;


/// A matched span of the document, `start <= end`, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
	/// First matched character.
	pub start: CharIdx,
	/// One past the last matched character.
	pub end: CharIdx,
}

impl Match {
	/// Creates a match covering `[start, end)`.
	pub fn new(start: CharIdx, end: CharIdx) -> Self {
		debug_assert!(start <= end, "match start {start} after end {end}");
		Self { start, end }
	}

	/// Returns the length in characters.
	#[inline]
	pub fn len(&self) -> CharLen {
		self.end - self.start
	}

	/// Returns true for zero-width matches.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Returns the match as a forward selection range.
	pub fn range(&self) -> Range {
		Range::new(self.start, self.end)
	}
}

impl From<Match> for Range {
	fn from(m: Match) -> Self {
		m.range()
	}
}

/// Result of a single locate call.
///
/// `wrapped` is only ever true together with a match: it reports that the
/// match was found after crossing the start or end of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Located {
	/// The match, if any.
	pub found: Option<Match>,
	/// Whether finding it required crossing the document boundary.
	pub wrapped: bool,
}

impl Located {
	fn hit(m: Match) -> Self {
		Self {
			found: Some(m),
			wrapped: false,
		}
	}

	fn wrapped(m: Match) -> Self {
		Self {
			found: Some(m),
			wrapped: true,
		}
	}
}

/// Locates the nearest match from `from` in `direction`.
///
/// Forward returns the first match starting at or after `from`. Backward
/// returns the last match lying entirely within `[0, from)`. With `wrap`, a
/// miss continues from the opposite end of the document and the result is
/// flagged as wrapped. An empty document never matches.
pub fn locate(
	text: &str,
	pattern: &CompiledPattern,
	from: CharIdx,
	direction: SeqDirection,
	wrap: bool,
) -> Located {
	if text.is_empty() {
		return Located::default();
	}

	let mut offsets = CharOffsets::new(text);
	let from_byte = offsets.byte_at(from);
	let re = pattern.regex();

	let byte_span = match direction {
		SeqDirection::Next => forward(text, re, from_byte, wrap),
		SeqDirection::Prev => backward(text, re, from_byte, wrap),
	};
	let located = match byte_span {
		Some(((start, end), wrapped)) => {
			let m = Match::new(offsets.char_at(start), offsets.char_at(end));
			if wrapped { Located::wrapped(m) } else { Located::hit(m) }
		}
		None => Located::default(),
	};

	trace!(
		from,
		?direction,
		wrap,
		found = ?located.found,
		wrapped = located.wrapped,
		"locate"
	);
	located
}

/// Returns every non-overlapping match in document order.
pub fn locate_all(text: &str, pattern: &CompiledPattern) -> Vec<Match> {
	let mut offsets = CharOffsets::new(text);
	pattern
		.regex()
		.find_iter(text)
		.map(|m| {
			let start = offsets.char_at(m.start());
			Match::new(start, offsets.char_at(m.end()))
		})
		.collect()
}

type ByteHit = ((usize, usize), bool);

fn forward(text: &str, re: &regex::Regex, from_byte: usize, wrap: bool) -> Option<ByteHit> {
	if let Some(m) = re.find_at(text, from_byte) {
		return Some(((m.start(), m.end()), false));
	}
	if wrap
		&& let Some(m) = re.find(text)
		&& m.start() < from_byte
	{
		return Some(((m.start(), m.end()), true));
	}
	None
}

/// There is no reverse matcher, so this keeps the last hit of a forward
/// scan. Candidates before the origin are matched against `text[..from_byte]`
/// as if the document ended there, so no candidate reaches past the origin.
/// The wrap scan runs from the origin to the end of the document.
fn backward(text: &str, re: &regex::Regex, from_byte: usize, wrap: bool) -> Option<ByteHit> {
	let before = re
		.find_iter(&text[..from_byte])
		.filter(|m| m.start() < from_byte)
		.last()
		.map(|m| (m.start(), m.end()));
	if let Some(span) = before {
		return Some((span, false));
	}
	if !wrap {
		return None;
	}
	last_from(text, re, from_byte).map(|span| (span, true))
}

/// Returns the last match of a forward scan starting at `from_byte`.
fn last_from(text: &str, re: &regex::Regex, from_byte: usize) -> Option<(usize, usize)> {
	let mut last = None;
	let mut at = from_byte;
	while at <= text.len() {
		let Some(m) = re.find_at(text, at) else { break };
		last = Some((m.start(), m.end()));
		at = if m.start() == m.end() {
			m.end() + text[m.end()..].chars().next().map_or(1, char::len_utf8)
		} else {
			m.end()
		};
	}
	last
}
