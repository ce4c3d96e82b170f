use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use laneboard_engine::{COLUMN_OVERSCAN, plan_window};

use super::app::{AppState, lane_width_cells};
use super::components::{controls, lane};

const LANE_HEADER_HEIGHT: u16 = 4;

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    // Loading supersedes everything, including partially available data.
    if state.snapshot.loading {
        render_placeholder(f, f.area(), "Loading sessions…");
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    controls::render(f, chunks[0], &state.snapshot);
    render_footer(f, chunks[2], state);

    let board_area = chunks[1];
    state.board_viewport = board_area.width as u64;
    state.rows_viewport = board_area.height.saturating_sub(LANE_HEADER_HEIGHT) as u64;

    if state.snapshot.visible_ids.is_empty() {
        render_placeholder(
            f,
            board_area,
            "No sessions selected — pass session files or --dir to compare them here",
        );
        return;
    }

    render_board(f, board_area, state);
}

fn render_board(f: &mut Frame, area: Rect, state: &mut AppState) {
    let lane_w = lane_width_cells();
    let count = state.snapshot.visible_ids.len();
    let viewport = area.width as u64;

    let plan = plan_window(count, |_| lane_w, state.board_scroll, viewport, COLUMN_OVERSCAN);
    state.board_scroll = state
        .board_scroll
        .min(plan.total_extent.saturating_sub(viewport));
    let scroll = state.board_scroll;

    for item in &plan.items {
        // Overscan items sit outside the paintable area; clip to it.
        let left = item.offset.max(scroll);
        let right = (item.offset + item.extent).min(scroll + viewport);
        if right <= left {
            continue;
        }

        let Some(id) = state.snapshot.visible_ids.get(item.index) else {
            continue;
        };
        let Some(data) = state.snapshot.sessions.get(id) else {
            continue;
        };

        let rect = Rect {
            x: area.x + (left - scroll) as u16,
            y: area.y,
            width: (right - left) as u16,
            height: area.height,
        };
        let focused = item.index == state.focused;
        let ctx = lane::LaneContext {
            zoom: state.snapshot.zoom,
            brush: state.snapshot.brush.as_ref(),
            scroll: state.lane_scroll(id),
            cursor: focused.then_some(state.cursor),
            focused,
            header_height: LANE_HEADER_HEIGHT,
        };
        lane::render(f, rect, data, ctx);
    }
}

fn render_placeholder(f: &mut Frame, area: Rect, message: &str) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(text, vertical[1]);
}

fn render_footer(f: &mut Frame, area: Rect, state: &AppState) {
    let hints = "←→ lanes  ↑↓ rows  1/2/3 zoom  u/a/t/e highlight  ⌫ clear  x reset  ⏎ select  q quit";
    let line = match &state.selected {
        Some((uuid, role)) => Line::from(format!("{hints}  │  selected {uuid} ({})", role.as_str())),
        None => Line::from(hints),
    };

    let footer = Paragraph::new(line)
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM));
    f.render_widget(footer, area);
}
