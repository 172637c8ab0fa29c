//! nmd list コマンド
//!
//! カタログの都市一覧を表示する。

use crate::card::CityCard;
use crate::commands::load_catalog;
use crate::continent::Selection;
use crate::view::CityView;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Filter by continent (all, asia, europe, north-america, south-america, africa, oceania)
    #[arg(long, default_value = "all")]
    pub continent: String,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only city names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,

    /// Load the catalog from a TOML file instead of the builtin data
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<(), String> {
    // 1. カタログを読み込み
    let catalog = load_catalog(args.catalog.as_deref()).map_err(|e| e.to_string())?;

    // 2. 大陸選択をパース
    let selection = Selection::parse(&args.continent).map_err(|e| e.to_string())?;

    // 3. ビューを構築してフィルタ
    let mut view = CityView::new(catalog);
    view.select(selection);

    // 4. 出力
    if args.json {
        print_json(&view)?;
    } else if args.simple {
        print_simple(&view);
    } else {
        print_table(&view);
    }

    Ok(())
}

fn print_table(view: &CityView) {
    let cities = view.filtered_cities();
    if cities.is_empty() {
        print_empty_state();
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Rank", "City", "Country", "Continent", "Score", "Cost/mo", "Internet", "Liked",
        "Safety", "Temp", "AQI",
    ]);

    for city in &cities {
        let card = CityCard::from_record(city);
        table.add_row(vec![
            format!("#{}", card.rank),
            card.name,
            card.country,
            card.continent,
            card.overall_score,
            card.cost_per_month,
            card.internet_speed,
            card.liked_percentage,
            city.safety.colored_label(),
            card.temperature,
            card.aqi,
        ]);
    }

    println!("{table}");
    println!("{}", view.count_label());
}

fn print_json(view: &CityView) -> Result<(), String> {
    // 空の場合も [] を出力
    let cards: Vec<CityCard> = view
        .filtered_cities()
        .into_iter()
        .map(CityCard::from_record)
        .collect();
    serde_json::to_string_pretty(&cards)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize cities: {}", e))
}

fn print_simple(view: &CityView) {
    let cities = view.filtered_cities();
    if cities.is_empty() {
        print_empty_state();
        return;
    }
    for city in cities {
        println!("{}", city.name);
    }
}

/// 空状態のフォールバック表示（リセット操作の案内つき）
fn print_empty_state() {
    println!("No cities registered for this continent yet");
    println!("Run `nmd list` to show all cities");
}
