use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use laneboard_runtime::BoardSnapshot;
use laneboard_types::{BrushCriterion, Role, StatusBrush, ZoomLevel};

/// Top bar: zoom indicator plus the highlight legend. The active legend
/// entry mirrors whatever criterion is currently brushed, from any source.
pub(crate) fn render(f: &mut Frame, area: Rect, snapshot: &BoardSnapshot) {
    let zoom_line = Line::from(vec![
        Span::styled("ZOOM ", Style::default().fg(Color::DarkGray)),
        zoom_span(snapshot.zoom, ZoomLevel::Pixel, '1'),
        Span::raw(" "),
        zoom_span(snapshot.zoom, ZoomLevel::Skim, '2'),
        Span::raw(" "),
        zoom_span(snapshot.zoom, ZoomLevel::Read, '3'),
    ]);

    let brush = snapshot.brush.as_ref();
    let legend_line = Line::from(vec![
        Span::styled("HIGHLIGHT ", Style::default().fg(Color::DarkGray)),
        legend_span("[u]ser", is_role(brush, Role::User), Color::Cyan),
        Span::raw(" "),
        legend_span("[a]ssistant", is_role(brush, Role::Assistant), Color::White),
        Span::raw(" "),
        legend_span("[t]ools", matches!(brush, Some(BrushCriterion::Tool(_))), Color::Magenta),
        Span::raw(" "),
        legend_span(
            "[e]rrors",
            matches!(brush, Some(BrushCriterion::Status(StatusBrush::Error))),
            Color::Red,
        ),
    ]);

    let bar = Paragraph::new(vec![zoom_line, legend_line]);
    f.render_widget(bar, area);
}

fn is_role(brush: Option<&BrushCriterion>, role: Role) -> bool {
    matches!(brush, Some(BrushCriterion::Role(r)) if *r == role)
}

fn zoom_span(current: ZoomLevel, level: ZoomLevel, key: char) -> Span<'static> {
    let label = format!("[{key}]{}", level.label());
    if current == level {
        Span::styled(
            label,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, Style::default().fg(Color::DarkGray))
    }
}

fn legend_span(label: &str, active: bool, color: Color) -> Span<'_> {
    if active {
        Span::styled(
            label.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label.to_string(), Style::default().fg(Color::Gray))
    }
}
