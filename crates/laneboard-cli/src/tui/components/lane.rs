use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use laneboard_engine::{ROW_OVERSCAN, plan_window, record_has_error, record_is_active};
use laneboard_types::{
    BoardSessionData, BrushCriterion, ContentBlock, InteractionRecord, Role, ZoomLevel,
};

use super::super::app::row_height_cells;

pub(crate) struct LaneContext<'a> {
    pub zoom: ZoomLevel,
    pub brush: Option<&'a BrushCriterion>,
    pub scroll: u64,
    pub cursor: Option<usize>,
    pub focused: bool,
    pub header_height: u16,
}

pub(crate) fn render(f: &mut Frame, area: Rect, data: &BoardSessionData, ctx: LaneContext) {
    let border_style = if ctx.focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height <= ctx.header_height || inner.width == 0 {
        return;
    }

    let header_area = Rect { height: ctx.header_height, ..inner };
    render_header(f, header_area, data, ctx.focused);

    let rows_area = Rect {
        x: inner.x,
        y: inner.y + ctx.header_height,
        width: inner.width,
        height: inner.height - ctx.header_height,
    };
    render_rows(f, rows_area, data, &ctx);
}

/// Sticky lane header: title, date and wall time, then the stat chips.
fn render_header(f: &mut Frame, area: Rect, data: &BoardSessionData, focused: bool) {
    let title_style = if focused {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let stats = &data.stats;
    let duration_s = stats.duration_ms / 1000;
    let lines = vec![
        Line::from(Span::styled(data.session.title(), title_style)),
        Line::from(Span::styled(
            format!(
                "{}  {}m{:02}s",
                data.session.last_modified.format("%Y-%m-%d %H:%M"),
                duration_s / 60,
                duration_s % 60,
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled(
                format!("⬡ {} tok", stats.total_tokens),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("  "),
            Span::styled(
                format!("⚒ {}", stats.tool_count),
                Style::default().fg(Color::Magenta),
            ),
            Span::raw("  "),
            Span::styled(
                format!("✗ {}", stats.error_count),
                if stats.error_count > 0 {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            ),
        ]),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

fn render_rows(f: &mut Frame, area: Rect, data: &BoardSessionData, ctx: &LaneContext) {
    let row_h = row_height_cells(ctx.zoom);
    let viewport = area.height as u64;
    let plan = plan_window(
        data.records.len(),
        |_| row_h,
        ctx.scroll,
        viewport,
        ROW_OVERSCAN,
    );
    let scroll = ctx.scroll.min(plan.total_extent.saturating_sub(viewport));

    for item in &plan.items {
        let top = item.offset.max(scroll);
        let bottom = (item.offset + item.extent).min(scroll + viewport);
        if bottom <= top {
            continue;
        }
        let Some(record) = data.records.get(item.index) else {
            continue;
        };

        let rect = Rect {
            x: area.x,
            y: area.y + (top - scroll) as u16,
            width: area.width,
            height: (bottom - top) as u16,
        };
        // Rows clipped at the viewport edge lose their top lines so the
        // visible part stays aligned with the row grid.
        let skip_lines = (top - item.offset) as usize;
        render_card(f, rect, record, ctx, item.index, skip_lines);
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    record: &InteractionRecord,
    ctx: &LaneContext,
    index: usize,
    skip_lines: usize,
) {
    let active = record_is_active(ctx.brush, record);
    let mut style = role_style(record.role);
    if ctx.brush.is_some() && !active {
        style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM);
    }
    if ctx.cursor == Some(index) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let lines: Vec<Line> = card_lines(record, ctx.zoom)
        .into_iter()
        .skip(skip_lines)
        .take(area.height as usize)
        .collect();
    let card = Paragraph::new(lines).style(style);
    f.render_widget(card, area);
}

/// Card body per zoom level. Pixel is a one-line strip, skim adds the
/// token and tool summary, read also shows leading message text.
fn card_lines(record: &InteractionRecord, zoom: ZoomLevel) -> Vec<Line<'static>> {
    let marker = role_marker(record.role);
    let head = format!("{marker} {}", record.role.as_str());

    match zoom {
        ZoomLevel::Pixel => vec![Line::from(head)],
        ZoomLevel::Skim => {
            let mut lines = vec![Line::from(head), Line::from(summary_line(record))];
            lines.extend(text_lines(record, 3));
            lines
        }
        ZoomLevel::Read => {
            let mut lines = vec![Line::from(head), Line::from(summary_line(record))];
            lines.extend(text_lines(record, 7));
            lines
        }
    }
}

fn summary_line(record: &InteractionRecord) -> String {
    let mut parts = Vec::new();
    if let Some(usage) = &record.usage {
        parts.push(format!("{}↑ {}↓", usage.input_tokens, usage.output_tokens));
    }
    if let Some(tool) = &record.tool_use {
        if tool.name.is_empty() {
            parts.push("tool".to_string());
        } else {
            parts.push(format!("tool:{}", tool.name));
        }
    }
    if record_has_error(record) {
        parts.push("error".to_string());
    }
    parts.join("  ")
}

fn text_lines(record: &InteractionRecord, max: usize) -> Vec<Line<'static>> {
    record
        .content
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            _ => None,
        })
        .flat_map(str::lines)
        .filter(|l| !l.trim().is_empty())
        .take(max)
        .map(|l| Line::from(l.to_string()))
        .collect()
}

fn role_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Cyan),
        Role::Assistant => Style::default().fg(Color::White),
        Role::System => Style::default().fg(Color::Yellow),
        Role::Other => Style::default().fg(Color::Gray),
    }
}

fn role_marker(role: Role) -> &'static str {
    match role {
        Role::User => "▸",
        Role::Assistant => "◂",
        Role::System => "◦",
        Role::Other => "·",
    }
}
