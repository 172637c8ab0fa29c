//! カタログファイルの読み込み
//!
//! TOMLで記述されたフィクスチャカタログを読み込み、著述時エラー
//! （id/rankの重複や範囲外の値）を検出する。不正なレコードは
//! 読み込み時に拒否し、描画側には届かない。

use super::{Catalog, CityRecord};
use crate::error::{NmdError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// カタログファイルのルート
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "city")]
    cities: Vec<CityRecord>,
}

/// TOMLファイルからカタログを読み込む
pub(super) fn load(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

/// TOML文字列からカタログを構築
pub(super) fn from_toml_str(content: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(content)?;
    validate(&file.cities)?;
    Ok(Catalog::from_records(file.cities))
}

/// 著述時の整合性チェック
fn validate(cities: &[CityRecord]) -> Result<()> {
    let mut ids = HashSet::new();
    let mut ranks = HashSet::new();

    for city in cities {
        if !ids.insert(city.id.as_str()) {
            return Err(NmdError::InvalidCatalog(format!(
                "duplicate id: {}",
                city.id
            )));
        }
        if city.rank == 0 {
            return Err(NmdError::InvalidCatalog(format!(
                "rank must be positive: {}",
                city.name
            )));
        }
        if !ranks.insert(city.rank) {
            return Err(NmdError::InvalidCatalog(format!(
                "duplicate rank: {} ({})",
                city.rank, city.name
            )));
        }
        if city.liked_percentage > 100 {
            return Err(NmdError::InvalidCatalog(format!(
                "liked_percentage out of range: {} ({})",
                city.liked_percentage, city.name
            )));
        }
        if !(0.0..=5.0).contains(&city.overall_score) {
            return Err(NmdError::InvalidCatalog(format!(
                "overall_score out of range: {} ({})",
                city.overall_score, city.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
