//! 都市カタログ
//!
//! 読み取り専用の都市レコード集合と大陸フィルタオプションを提供する。
//! カタログは構築後に変更されず、利用側へ値として注入される。

mod builtin;
mod city;
mod loader;

pub use city::CityRecord;

use crate::continent::{Continent, ContinentOption, CONTINENT_OPTIONS};
use crate::error::Result;
use std::path::Path;

/// 都市カタログ
///
/// レコードの並びは挿入順（= rank順）を正とする。
#[derive(Debug, Clone)]
pub struct Catalog {
    cities: Vec<CityRecord>,
}

impl Catalog {
    /// 組み込みの都市データからカタログを作成
    pub fn builtin() -> Self {
        Self {
            cities: builtin::cities(),
        }
    }

    /// TOMLファイルからカタログを読み込む
    ///
    /// 著述時エラー（id/rank重複、範囲外の値）は読み込み時に検出する。
    pub fn from_toml_path(path: &Path) -> Result<Self> {
        loader::load(path)
    }

    /// 検証済みレコード列からカタログを作成（フィクスチャ用）
    pub fn from_records(cities: Vec<CityRecord>) -> Self {
        Self { cities }
    }

    /// 全レコードを挿入順で取得
    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }

    /// レコード数を取得
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// レコードが存在しないか
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// 大陸フィルタオプション一覧（表示順固定）
    pub fn continent_options(&self) -> &'static [ContinentOption] {
        CONTINENT_OPTIONS
    }

    /// 大陸ごとのレコード数を取得
    pub fn count_for(&self, continent: Continent) -> usize {
        self.cities
            .iter()
            .filter(|c| c.continent == continent)
            .count()
    }

    /// idまたは名前（大文字小文字無視）で都市を検索
    pub fn find_city(&self, query: &str) -> Option<&CityRecord> {
        self.cities.iter().find(|c| c.id == query).or_else(|| {
            self.cities
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(query))
        })
    }
}

#[cfg(test)]
#[path = "catalog/catalog_test.rs"]
mod tests;
