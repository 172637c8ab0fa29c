//! nmd continents コマンド
//!
//! 大陸フィルタオプションと各大陸の都市数を表示する。

use crate::commands::load_catalog;
use crate::continent::Selection;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Load the catalog from a TOML file instead of the builtin data
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<(), String> {
    let catalog = load_catalog(args.catalog.as_deref()).map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["", "Continent", "Value", "Cities"]);

    for option in catalog.continent_options() {
        let count = match option.selection {
            Selection::All => catalog.len(),
            Selection::Only(c) => catalog.count_for(c),
        };
        table.add_row(vec![
            option.glyph.to_string(),
            option.label.to_string(),
            option.selection.value().to_string(),
            count.to_string(),
        ]);
    }

    println!("{table}");

    Ok(())
}
