//! nmd browse コマンド
//!
//! インタラクティブな都市ブラウザを起動する。

use crate::commands::load_catalog;
use crate::tui;
use crate::view::CityView;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Load the catalog from a TOML file instead of the builtin data
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<(), String> {
    let catalog = load_catalog(args.catalog.as_deref()).map_err(|e| e.to_string())?;
    let view = CityView::new(catalog);

    tui::browser::run(view).map_err(|e| e.to_string())
}
