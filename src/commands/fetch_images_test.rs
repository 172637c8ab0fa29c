use super::*;
use crate::continent::Continent;
use crate::safety::Safety;
use chrono::TimeZone;

fn make_city(id: &str, name: &str, country: &str, image_path: &str) -> CityRecord {
    CityRecord {
        id: id.to_string(),
        rank: 1,
        name: name.to_string(),
        country: country.to_string(),
        continent: Continent::Asia,
        image_path: image_path.to_string(),
        overall_score: 4.5,
        cost_per_month: 1579,
        internet_speed: 24,
        liked_percentage: 94,
        safety: Safety::High,
        temperature: 28,
        aqi: 59,
    }
}

#[test]
fn test_search_query_includes_name_and_country() {
    let city = make_city("1", "Bangkok", "Thailand", "city/bangkok.jpg");
    assert_eq!(search_query(&city), "Bangkok Thailand city skyline");
}

#[test]
fn test_image_file_name_strips_directory() {
    let city = make_city("1", "Bangkok", "Thailand", "city/bangkok.jpg");
    assert_eq!(image_file_name(&city), "bangkok.jpg");
}

#[test]
fn test_image_file_name_falls_back_to_id() {
    let city = make_city("7", "Seoul", "South Korea", "");
    assert_eq!(image_file_name(&city), "7.jpg");
}

#[test]
fn test_manifest_skips_absent_fields() {
    let manifest = FetchManifest {
        fetched_at: Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap(),
        entries: vec![ManifestEntry {
            id: "1".to_string(),
            name: "Bangkok".to_string(),
            file: "bangkok.jpg".to_string(),
            photo_id: Some("eOLpJytrbsQ".to_string()),
            error: None,
        }],
    };

    let json = serde_json::to_string_pretty(&manifest).unwrap();

    assert!(json.contains("\"fetched_at\": \"2025-01-15T10:30:00Z\""));
    assert!(json.contains("\"photo_id\": \"eOLpJytrbsQ\""));
    assert!(!json.contains("\"error\""));
}

#[test]
fn test_manifest_records_failures() {
    let manifest = FetchManifest {
        fetched_at: Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap(),
        entries: vec![ManifestEntry {
            id: "1".to_string(),
            name: "Bangkok".to_string(),
            file: "bangkok.jpg".to_string(),
            photo_id: None,
            error: Some("No search result for: Bangkok Thailand city skyline".to_string()),
        }],
    };

    let json = serde_json::to_string_pretty(&manifest).unwrap();

    assert!(json.contains("\"error\""));
    assert!(!json.contains("\"photo_id\""));
}

#[test]
fn test_write_manifest_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let entries = vec![ManifestEntry {
        id: "1".to_string(),
        name: "Bangkok".to_string(),
        file: "bangkok.jpg".to_string(),
        photo_id: Some("abc".to_string()),
        error: None,
    }];

    write_manifest(dir.path(), entries).unwrap();

    let content = std::fs::read_to_string(dir.path().join("manifest.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["entries"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["entries"][0]["file"], "bangkok.jpg");
}
