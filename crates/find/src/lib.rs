//! Interactive find/replace engine for a text-editing surface.
//!
//! The engine never owns the document. Every operation borrows a
//! [`FindHost`] for the duration of one call, reads the current text through
//! it, and reports feedback as [`FindEvent`]s the host renders.
//!
//! ```text
//! host event ─► FindSession ─► CompiledPattern (cached until query/options change)
//!                    │
//!                    ├─► locate ─► select        (find next / previous)
//!                    └─► replace ─► locate ...   (replace one / replace all)
//! ```

/// Reference [`FindHost`] backed by a rope, with anchors and undo grouping.
pub mod buffer;
/// Engine configuration loaded from TOML.
pub mod config;
/// Error types.
pub mod error;
/// The host seam: document access and feedback signals.
pub mod host;
/// Match location with wraparound.
pub mod locate;
/// Search options toggled by the user.
pub mod options;
/// Pattern compilation.
pub mod pattern;
/// Guarded single replace and atomic replace-all.
pub mod replace;
/// Mapping matches onto the host selection.
pub mod select;
/// Command surface tying the components together.
pub mod session;
/// Visible navigation state.
pub mod state;

pub use buffer::TextBuffer;
pub use config::FindConfig;
pub use error::{ConfigError, PatternError};
pub use host::{Anchor, AnchorId, FindEvent, FindHost};
pub use locate::{Located, Match, locate, locate_all};
pub use options::SearchOptions;
pub use pattern::CompiledPattern;
pub use replace::{ReplaceAllReport, ReplaceOneReport, replace_all, replace_all_until, replace_one};
pub use select::SearchOutcome;
pub use session::FindSession;
pub use state::NavState;
