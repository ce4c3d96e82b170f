mod args;
mod tui;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::Path;

use args::Cli;
use laneboard_runtime::{BoardState, JsonlSource, scan_sessions};
use laneboard_types::SessionRef;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let board = runtime.block_on(load_board(&cli))?;
    tui::run(board)
}

async fn load_board(cli: &Cli) -> Result<BoardState> {
    let mut refs: Vec<SessionRef> = cli
        .files
        .iter()
        .map(|path| session_ref_for(path))
        .collect::<Result<_>>()?;

    if let Some(dir) = &cli.dir {
        let mut scanned = scan_sessions(dir)
            .with_context(|| format!("failed to scan {}", dir.display()))?;
        scanned.truncate(cli.limit);
        refs.extend(scanned);
    }

    let mut board = BoardState::new();
    board.set_zoom(cli.zoom.into());
    board.load_sessions(&JsonlSource, &refs).await;
    Ok(board)
}

fn session_ref_for(path: &Path) -> Result<SessionRef> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let last_modified = metadata
        .modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now());

    Ok(SessionRef {
        id,
        summary: None,
        last_modified,
        path: path.to_path_buf(),
    })
}
