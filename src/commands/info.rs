//! nmd info コマンド
//!
//! 都市1件の詳細を表示する。

use crate::card::CityCard;
use crate::catalog::CityRecord;
use crate::commands::load_catalog;
use crate::error::NmdError;
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::PathBuf;

/// 出力形式
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
pub struct Args {
    /// City id or name
    pub city: String,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Load the catalog from a TOML file instead of the builtin data
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<(), String> {
    let catalog = load_catalog(args.catalog.as_deref()).map_err(|e| e.to_string())?;
    let record = catalog
        .find_city(&args.city)
        .ok_or_else(|| NmdError::CityNotFound(args.city.clone()).to_string())?;
    let card = CityCard::from_record(record);

    match args.format {
        OutputFormat::Table => print_table(record, &card),
        OutputFormat::Json => print_json(&card)?,
        OutputFormat::Yaml => print_yaml(&card)?,
    }

    Ok(())
}

fn print_table(record: &CityRecord, card: &CityCard) {
    // 基本情報
    println!("City Information");
    println!("================");
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["Rank".to_string(), format!("#{}", card.rank)]);
    table.add_row(vec!["City".to_string(), card.name.clone()]);
    table.add_row(vec!["Country".to_string(), card.country.clone()]);
    table.add_row(vec!["Continent".to_string(), card.continent.clone()]);
    table.add_row(vec!["Image".to_string(), card.image_path.clone()]);

    println!("{table}");
    println!();

    // スコア情報
    println!("Scores");
    println!("------");

    let mut score_table = Table::new();
    score_table.load_preset(UTF8_FULL);
    score_table.set_header(vec!["Field", "Value"]);

    score_table.add_row(vec!["Overall".to_string(), card.overall_score.clone()]);
    score_table.add_row(vec!["Cost/month".to_string(), card.cost_per_month.clone()]);
    score_table.add_row(vec!["Internet".to_string(), card.internet_speed.clone()]);
    score_table.add_row(vec!["Liked".to_string(), card.liked_percentage.clone()]);
    score_table.add_row(vec!["Safety".to_string(), record.safety.colored_label()]);

    println!("{score_table}");
    println!();

    // 気候情報
    println!("Climate");
    println!("-------");

    let mut climate_table = Table::new();
    climate_table.load_preset(UTF8_FULL);
    climate_table.set_header(vec!["Field", "Value"]);

    climate_table.add_row(vec!["Temperature".to_string(), card.temperature.clone()]);
    climate_table.add_row(vec!["Air quality".to_string(), card.aqi.clone()]);

    println!("{climate_table}");
}

fn print_json(card: &CityCard) -> Result<(), String> {
    serde_json::to_string_pretty(card)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize to JSON: {}", e))
}

fn print_yaml(card: &CityCard) -> Result<(), String> {
    serde_yaml::to_string(card)
        .map(|yaml| print!("{yaml}"))
        .map_err(|e| format!("Failed to serialize to YAML: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn bangkok_card() -> CityCard {
        let catalog = Catalog::builtin();
        let record = catalog.find_city("Bangkok").unwrap();
        CityCard::from_record(record)
    }

    #[test]
    fn test_json_serialization() {
        let card = bangkok_card();
        let json = serde_json::to_string_pretty(&card).unwrap();

        assert!(json.contains("\"name\": \"Bangkok\""));
        assert!(json.contains("\"cost_per_month\": \"$1,579\""));
        assert!(json.contains("\"safety_label\": \"High\""));
        assert!(json.contains("\"safety_color\": \"success\""));
    }

    #[test]
    fn test_yaml_serialization() {
        let card = bangkok_card();
        let yaml = serde_yaml::to_string(&card).unwrap();

        assert!(yaml.contains("name: Bangkok"));
        assert!(yaml.contains("continent: Asia"));
        assert!(yaml.contains("aqi: AQI 59"));
    }

    #[test]
    fn test_lookup_miss_is_an_error() {
        let catalog = Catalog::builtin();
        assert!(catalog.find_city("Atlantis").is_none());
    }
}
