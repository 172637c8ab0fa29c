//! 都市カード
//!
//! レコードを表示用フィールドへ写像する。数値には単位サフィックスを
//! 付け、生活費は3桁区切りのUSD表記（小数なし）にする。

use crate::catalog::CityRecord;
use serde::Serialize;

/// 表示用の都市カード
#[derive(Debug, Clone, Serialize)]
pub struct CityCard {
    pub rank: u32,
    pub name: String,
    pub country: String,
    pub continent: String,
    pub image_path: String,
    pub overall_score: String,
    pub cost_per_month: String,
    pub internet_speed: String,
    pub liked_percentage: String,
    pub safety_label: &'static str,
    pub safety_color: &'static str,
    pub temperature: String,
    pub aqi: String,
}

impl CityCard {
    /// レコードから表示用カードを作成
    pub fn from_record(record: &CityRecord) -> Self {
        Self {
            rank: record.rank,
            name: record.name.clone(),
            country: record.country.clone(),
            continent: record.continent.display_name().to_string(),
            image_path: record.image_path.clone(),
            overall_score: format!("{:.1}", record.overall_score),
            cost_per_month: format_usd(record.cost_per_month),
            internet_speed: format!("{} Mbps", record.internet_speed),
            liked_percentage: format!("{}%", record.liked_percentage),
            safety_label: record.safety.label(),
            safety_color: record.safety.color_token(),
            temperature: format!("{}°C", record.temperature),
            aqi: format!("AQI {}", record.aqi),
        }
    }
}

/// 3桁区切りのUSD表記
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

#[cfg(test)]
#[path = "card_test.rs"]
mod tests;

#[cfg(test)]
#[path = "card_proptests.rs"]
mod proptests;
