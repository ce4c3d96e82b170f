use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use laneboard_engine::LANE_EXTENT;
use laneboard_runtime::BoardSnapshot;
use laneboard_types::{BoardSessionData, InteractionRecord, Role, ZoomLevel};

/// Virtual units per terminal cell, per axis. The windowing tables are in
/// units (lane 320, rows 12/85/160); the terminal renders at this scale.
pub(crate) const UNITS_PER_COLUMN_CELL: u64 = 8;
pub(crate) const UNITS_PER_ROW_CELL: u64 = 16;

pub(crate) fn lane_width_cells() -> u64 {
    LANE_EXTENT / UNITS_PER_COLUMN_CELL
}

pub(crate) fn row_height_cells(zoom: ZoomLevel) -> u64 {
    zoom.row_extent().div_ceil(UNITS_PER_ROW_CELL)
}

/// Render-side state: the latest board snapshot plus scroll positions,
/// focus, and the last bubbled record identity. Scrolled-out lanes and rows
/// simply stop being rendered; their data stays in the board state.
pub(crate) struct AppState {
    pub snapshot: BoardSnapshot,
    pub board_scroll: u64,
    pub lane_scrolls: HashMap<String, u64>,
    pub focused: usize,
    pub cursor: usize,
    /// Identity of the last selected record, bubbled for host handling.
    pub selected: Option<(Uuid, Role)>,
    /// Viewport extents in cells, recorded on each draw for scroll math.
    pub board_viewport: u64,
    pub rows_viewport: u64,
}

impl AppState {
    pub fn new(snapshot: BoardSnapshot) -> Self {
        Self {
            snapshot,
            board_scroll: 0,
            lane_scrolls: HashMap::new(),
            focused: 0,
            cursor: 0,
            selected: None,
            board_viewport: 0,
            rows_viewport: 0,
        }
    }

    /// Swap in a fresh snapshot and re-clamp focus and cursor.
    pub fn refresh(&mut self, snapshot: BoardSnapshot) {
        self.snapshot = snapshot;
        let lanes = self.snapshot.visible_ids.len();
        if lanes == 0 {
            self.focused = 0;
            self.cursor = 0;
            self.board_scroll = 0;
            self.lane_scrolls.clear();
            return;
        }
        self.focused = self.focused.min(lanes - 1);
        self.clamp_cursor();
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.snapshot.visible_ids.get(self.focused).map(String::as_str)
    }

    pub fn focused_lane(&self) -> Option<&Arc<BoardSessionData>> {
        self.focused_id().and_then(|id| self.snapshot.sessions.get(id))
    }

    pub fn cursor_record(&self) -> Option<&InteractionRecord> {
        self.focused_lane().and_then(|lane| lane.records.get(self.cursor))
    }

    pub fn lane_scroll(&self, id: &str) -> u64 {
        self.lane_scrolls.get(id).copied().unwrap_or(0)
    }

    pub fn focus_left(&mut self) {
        self.focused = self.focused.saturating_sub(1);
        self.clamp_cursor();
        self.keep_focus_visible();
    }

    pub fn focus_right(&mut self) {
        let lanes = self.snapshot.visible_ids.len();
        if lanes == 0 {
            return;
        }
        self.focused = (self.focused + 1).min(lanes - 1);
        self.clamp_cursor();
        self.keep_focus_visible();
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.keep_cursor_visible();
    }

    pub fn cursor_down(&mut self) {
        let rows = self.focused_lane().map(|l| l.records.len()).unwrap_or(0);
        if rows == 0 {
            return;
        }
        self.cursor = (self.cursor + 1).min(rows - 1);
        self.keep_cursor_visible();
    }

    /// Bubble the cursor record's identity (uuid + role).
    pub fn select_cursor(&mut self) {
        self.selected = self.cursor_record().map(|r| (r.uuid, r.role));
    }

    fn clamp_cursor(&mut self) {
        let rows = self.focused_lane().map(|l| l.records.len()).unwrap_or(0);
        self.cursor = if rows == 0 { 0 } else { self.cursor.min(rows - 1) };
    }

    fn keep_focus_visible(&mut self) {
        let lane_w = lane_width_cells();
        let left = self.focused as u64 * lane_w;
        let right = left + lane_w;
        if left < self.board_scroll {
            self.board_scroll = left;
        } else if self.board_viewport > 0 && right > self.board_scroll + self.board_viewport {
            self.board_scroll = right - self.board_viewport;
        }
    }

    fn keep_cursor_visible(&mut self) {
        let Some(id) = self.focused_id().map(str::to_string) else {
            return;
        };
        let row_h = row_height_cells(self.snapshot.zoom);
        let top = self.cursor as u64 * row_h;
        let bottom = top + row_h;
        let scroll = self.lane_scroll(&id);
        if top < scroll {
            self.lane_scrolls.insert(id, top);
        } else if self.rows_viewport > 0 && bottom > scroll + self.rows_viewport {
            self.lane_scrolls.insert(id, bottom - self.rows_viewport);
        }
    }
}
