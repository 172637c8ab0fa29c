//! 組み込み都市データ
//!
//! ランキング上位16都市のデータセット。rank順に列挙する。

use super::CityRecord;
use crate::continent::Continent;
use crate::safety::Safety;

#[allow(clippy::too_many_arguments)]
fn city(
    id: &str,
    rank: u32,
    name: &str,
    country: &str,
    continent: Continent,
    image_path: &str,
    overall_score: f64,
    cost_per_month: u32,
    internet_speed: u32,
    liked_percentage: u8,
    safety: Safety,
    temperature: i32,
    aqi: u32,
) -> CityRecord {
    CityRecord {
        id: id.to_string(),
        rank,
        name: name.to_string(),
        country: country.to_string(),
        continent,
        image_path: image_path.to_string(),
        overall_score,
        cost_per_month,
        internet_speed,
        liked_percentage,
        safety,
        temperature,
        aqi,
    }
}

/// 組み込みカタログの全レコード
pub(super) fn cities() -> Vec<CityRecord> {
    use Continent::*;
    use Safety::*;

    vec![
        city("1", 1, "Bangkok", "Thailand", Asia, "city/bangkok.jpg", 4.5, 1579, 24, 94, High, 28, 59),
        city("2", 2, "Lisbon", "Portugal", Europe, "city/lisbon.jpg", 4.7, 2100, 35, 96, High, 22, 32),
        city("3", 3, "Chiang Mai", "Thailand", Asia, "city/chiang-mai.jpg", 4.4, 1250, 22, 92, High, 26, 48),
        city("4", 4, "Mexico City", "Mexico", NorthAmerica, "city/mexico-city.jpg", 4.3, 1890, 28, 89, Medium, 18, 72),
        city("5", 5, "Bali", "Indonesia", Asia, "city/bali.jpg", 4.6, 1680, 20, 95, High, 29, 41),
        city("6", 6, "Porto", "Portugal", Europe, "city/porto.jpg", 4.5, 1950, 32, 93, High, 20, 28),
        city("7", 7, "Seoul", "South Korea", Asia, "city/seoul.jpg", 4.2, 2800, 95, 88, High, 15, 54),
        city("8", 8, "Barcelona", "Spain", Europe, "city/barcelona.jpg", 4.6, 2450, 38, 94, High, 21, 36),
        city("9", 9, "Tokyo", "Japan", Asia, "city/tokyo.jpg", 4.3, 3200, 88, 91, High, 19, 42),
        city("10", 10, "Buenos Aires", "Argentina", SouthAmerica, "city/buenos-aires.jpg", 4.1, 1450, 18, 87, Medium, 17, 38),
        city("11", 11, "Prague", "Czech Republic", Europe, "city/prague.jpg", 4.4, 2100, 30, 92, High, 14, 34),
        city("12", 12, "Austin", "United States", NorthAmerica, "city/austin.jpg", 4.0, 3800, 65, 86, High, 24, 45),
        city("13", 13, "Medellín", "Colombia", SouthAmerica, "city/medellin.jpg", 4.3, 1620, 25, 90, Medium, 22, 52),
        city("14", 14, "Athens", "Greece", Europe, "city/athens.jpg", 4.2, 1850, 27, 88, High, 23, 44),
        city("15", 15, "Cape Town", "South Africa", Africa, "city/cape-town.jpg", 4.3, 1720, 22, 91, Medium, 19, 38),
        city("16", 16, "Melbourne", "Australia", Oceania, "city/melbourne.jpg", 4.1, 3500, 45, 89, High, 16, 26),
    ]
}
