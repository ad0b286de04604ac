//! Core types for searching text: character ranges, directions and offset conversion.

/// Directional types for sequential navigation.
pub mod direction;
/// Conversion between character and byte offsets in UTF-8 text.
pub mod offset;
/// Text range types measured in characters.
pub mod range;

pub use direction::SeqDirection;
pub use offset::CharOffsets;
pub use range::{CharIdx, CharLen, Range};
