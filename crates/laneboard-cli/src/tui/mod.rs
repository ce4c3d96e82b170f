mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

use app::AppState;
use laneboard_runtime::BoardState;
use laneboard_types::{BrushCriterion, Role, StatusBrush, ToolBrush, ZoomLevel};

pub fn run(mut board: BoardState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut app = AppState::new(board.snapshot());
    let mut should_quit = false;
    let tick_rate = Duration::from_millis(250);

    while !should_quit {
        terminal.draw(|f| {
            ui::draw(f, &mut app);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        should_quit = true;
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        app.focus_left();
                        hover_brush(&board, &mut app);
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        app.focus_right();
                        hover_brush(&board, &mut app);
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        app.cursor_up();
                        hover_brush(&board, &mut app);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        app.cursor_down();
                        hover_brush(&board, &mut app);
                    }
                    KeyCode::Char('1') => set_zoom(&mut board, &mut app, ZoomLevel::Pixel),
                    KeyCode::Char('2') => set_zoom(&mut board, &mut app, ZoomLevel::Skim),
                    KeyCode::Char('3') => set_zoom(&mut board, &mut app, ZoomLevel::Read),
                    KeyCode::Char('u') => {
                        toggle_brush(&board, &mut app, BrushCriterion::Role(Role::User))
                    }
                    KeyCode::Char('a') => {
                        toggle_brush(&board, &mut app, BrushCriterion::Role(Role::Assistant))
                    }
                    KeyCode::Char('e') => {
                        toggle_brush(&board, &mut app, BrushCriterion::Status(StatusBrush::Error))
                    }
                    KeyCode::Char('t') => {
                        toggle_brush(&board, &mut app, BrushCriterion::Tool(ToolBrush::Any))
                    }
                    // Exact-name variant: brush by the tool under the cursor.
                    KeyCode::Char('T') => {
                        let named = app
                            .cursor_record()
                            .and_then(|r| r.tool_use.as_ref())
                            .map(|tool| BrushCriterion::Tool(ToolBrush::Named(tool.name.clone())));
                        if let Some(criterion) = named {
                            toggle_brush(&board, &mut app, criterion);
                        }
                    }
                    KeyCode::Backspace => {
                        board.brush().clear();
                        app.refresh(board.snapshot());
                    }
                    KeyCode::Char('x') => {
                        board.clear_board();
                        app.refresh(board.snapshot());
                    }
                    KeyCode::Enter => {
                        app.select_cursor();
                    }
                    _ => {}
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Cursor movement re-brushes by the hovered record's role, mirroring
/// hover-enter on a card. Leaving everything is Backspace (clear).
fn hover_brush(board: &BoardState, app: &mut AppState) {
    if let Some(record) = app.cursor_record() {
        board.brush().set(BrushCriterion::Role(record.role));
    } else {
        board.brush().clear();
    }
    app.refresh(board.snapshot());
}

fn set_zoom(board: &mut BoardState, app: &mut AppState, zoom: ZoomLevel) {
    board.set_zoom(zoom);
    app.refresh(board.snapshot());
}

/// Legend keys toggle: pressing the active criterion's key clears it,
/// anything else replaces the shared brush outright.
fn toggle_brush(board: &BoardState, app: &mut AppState, criterion: BrushCriterion) {
    if board.brush().active().as_ref() == Some(&criterion) {
        board.brush().clear();
    } else {
        board.brush().set(criterion);
    }
    app.refresh(board.snapshot());
}
