//! Board orchestration: the message-fetch boundary, session discovery, and
//! the single-owner board state consumed by rendering layers.
//!
//! All shared state lives in [`BoardState`] and mutates only by whole-value
//! replacement. Loads fan out one fetch per session and join before any
//! state update; there is no cancellation and no streaming mid-batch.

mod board;
mod discovery;
mod error;
mod source;

pub use board::{BoardSnapshot, BoardState, BrushCoordinator};
pub use discovery::scan_sessions;
pub use error::{Error, Result};
pub use source::{JsonlSource, MessageSource, parse_records};
