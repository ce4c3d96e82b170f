use clap::{Parser, ValueEnum};
use laneboard_types::ZoomLevel;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "laneboard")]
#[command(about = "Compare agent sessions side by side", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Session JSONL files to place on the board, in the given order
    pub files: Vec<PathBuf>,

    /// Directory to scan for session files (newest first)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Maximum number of sessions taken from --dir
    #[arg(long, default_value_t = 8)]
    pub limit: usize,

    /// Initial zoom level
    #[arg(long, value_enum, default_value_t = ZoomArg::Skim)]
    pub zoom: ZoomArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ZoomArg {
    Pixel,
    Skim,
    Read,
}

impl From<ZoomArg> for ZoomLevel {
    fn from(arg: ZoomArg) -> Self {
        match arg {
            ZoomArg::Pixel => ZoomLevel::Pixel,
            ZoomArg::Skim => ZoomLevel::Skim,
            ZoomArg::Read => ZoomLevel::Read,
        }
    }
}
