use serde::{Deserialize, Serialize};

use crate::record::Role;

/// Board density setting. Controls the row-size estimate only; changing it
/// never touches data or ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomLevel {
    /// One sliver per record; the whole session at a glance.
    Pixel,
    /// Compact cards.
    #[default]
    Skim,
    /// Full-height cards for reading content.
    Read,
}

impl ZoomLevel {
    /// Row extent in virtual units. Identical for every record in a mode;
    /// no per-record measurement is performed.
    pub fn row_extent(self) -> u64 {
        match self {
            ZoomLevel::Pixel => 12,
            ZoomLevel::Skim => 85,
            ZoomLevel::Read => 160,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ZoomLevel::Pixel => "PIXEL",
            ZoomLevel::Skim => "SKIM",
            ZoomLevel::Read => "READ",
        }
    }
}

/// Status facet of the brush. Only error highlighting exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBrush {
    Error,
}

/// Tool facet of the brush.
///
/// `Named` matches a record's tool-use descriptor by exact name. `Any`
/// matches every record carrying a tool-use descriptor and is what the
/// generic legend trigger emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolBrush {
    Named(String),
    Any,
}

/// The single cross-lane highlight criterion. At most one is active
/// globally; every lane evaluates it against its windowed records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrushCriterion {
    Role(Role),
    Status(StatusBrush),
    Tool(ToolBrush),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_extent_table() {
        assert_eq!(ZoomLevel::Pixel.row_extent(), 12);
        assert_eq!(ZoomLevel::Skim.row_extent(), 85);
        assert_eq!(ZoomLevel::Read.row_extent(), 160);
    }

    #[test]
    fn default_zoom_is_skim() {
        assert_eq!(ZoomLevel::default(), ZoomLevel::Skim);
    }
}
