//! Core types shared across the laneboard crates.
//!
//! The record model here is the normalized form produced once at the fetch
//! boundary; everything downstream (stats reduction, brush evaluation,
//! rendering) works on these types exhaustively instead of re-probing raw
//! JSON shapes.

mod board;
mod record;
mod session;

pub use board::{BrushCriterion, StatusBrush, ToolBrush, ZoomLevel};
pub use record::{
    ContentBlock, InteractionRecord, Role, TokenUsage, ToolOutcome, ToolResultBlock, ToolUse,
};
pub use session::{BoardSessionData, SessionRef, SessionStats};
