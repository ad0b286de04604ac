/// Direction of travel through a sequence such as a document or a match list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeqDirection {
	/// Towards the end of the sequence.
	#[default]
	Next,
	/// Towards the start of the sequence.
	Prev,
}
