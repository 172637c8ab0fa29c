use super::*;
use crate::catalog::Catalog;
use crate::continent::Continent;
use crate::safety::Safety;

fn make_record() -> CityRecord {
    CityRecord {
        id: "99".to_string(),
        rank: 42,
        name: "Testville".to_string(),
        country: "Testland".to_string(),
        continent: Continent::SouthAmerica,
        image_path: "city/testville.jpg".to_string(),
        overall_score: 4.0,
        cost_per_month: 1579,
        internet_speed: 24,
        liked_percentage: 94,
        safety: Safety::Medium,
        temperature: -5,
        aqi: 59,
    }
}

// ========================================
// format_usd tests
// ========================================

#[test]
fn test_format_usd_grouping() {
    assert_eq!(format_usd(0), "$0");
    assert_eq!(format_usd(999), "$999");
    assert_eq!(format_usd(1000), "$1,000");
    assert_eq!(format_usd(1579), "$1,579");
    assert_eq!(format_usd(1000000), "$1,000,000");
    assert_eq!(format_usd(u32::MAX), "$4,294,967,295");
}

// ========================================
// from_record tests
// ========================================

#[test]
fn test_card_formats_cost_with_separators() {
    let card = CityCard::from_record(&make_record());
    assert_eq!(card.cost_per_month, "$1,579");
}

#[test]
fn test_card_unit_suffixes() {
    let card = CityCard::from_record(&make_record());
    assert_eq!(card.internet_speed, "24 Mbps");
    assert_eq!(card.liked_percentage, "94%");
    assert_eq!(card.temperature, "-5°C");
    assert_eq!(card.aqi, "AQI 59");
}

#[test]
fn test_card_score_has_one_decimal() {
    let card = CityCard::from_record(&make_record());
    assert_eq!(card.overall_score, "4.0");
}

#[test]
fn test_card_safety_lookup() {
    let card = CityCard::from_record(&make_record());
    assert_eq!(card.safety_label, "Medium");
    assert_eq!(card.safety_color, "warning");
}

#[test]
fn test_card_continent_display_name() {
    let card = CityCard::from_record(&make_record());
    assert_eq!(card.continent, "South America");
}

#[test]
fn test_bangkok_card_from_builtin() {
    let catalog = Catalog::builtin();
    let bangkok = catalog.find_city("Bangkok").unwrap();
    let card = CityCard::from_record(bangkok);

    assert_eq!(card.rank, 1);
    assert_eq!(card.cost_per_month, "$1,579");
    assert_eq!(card.overall_score, "4.5");
    assert_eq!(card.safety_label, "High");
    assert_eq!(card.safety_color, "success");
}

#[test]
fn test_safety_mapping_is_consistent_across_records() {
    // 同じsafety値を持つ全レコードが同じラベル・トークンに解決される
    let catalog = Catalog::builtin();
    for city in catalog.cities() {
        let card = CityCard::from_record(city);
        assert_eq!(card.safety_label, city.safety.label());
        assert_eq!(card.safety_color, city.safety.color_token());
    }
}

#[test]
fn test_card_json_serialization() {
    let card = CityCard::from_record(&make_record());
    let json = serde_json::to_string_pretty(&card).unwrap();

    assert!(json.contains("\"cost_per_month\": \"$1,579\""));
    assert!(json.contains("\"safety_color\": \"warning\""));
    assert!(json.contains("\"name\": \"Testville\""));
}
