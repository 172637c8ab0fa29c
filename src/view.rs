//! フィルタビュー
//!
//! 選択中の大陸からフィルタ済みレコード列と件数ラベルを導出する。
//! 可変状態は `selection` のみで、単一のビューが専有する。

use crate::catalog::{Catalog, CityRecord};
use crate::continent::Selection;

/// 都市フィルタビュー
///
/// カタログは構築時に注入される。導出は全て副作用なし。
#[derive(Debug)]
pub struct CityView {
    catalog: Catalog,
    selection: Selection,
}

impl CityView {
    /// 初期選択 All でビューを作成
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::All,
        }
    }

    /// 現在の選択を取得
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// 大陸を選択
    pub fn select(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// カタログへの参照を取得
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 選択に一致するレコードをカタログ順で取得
    pub fn filtered_cities(&self) -> Vec<&CityRecord> {
        self.catalog
            .cities()
            .iter()
            .filter(|c| self.selection.matches(c.continent))
            .collect()
    }

    /// 件数ラベルを導出
    ///
    /// All選択時は総数、大陸選択時は大陸ラベル付きの件数。
    pub fn count_label(&self) -> String {
        let count = self.filtered_cities().len();
        let noun = if count == 1 { "city" } else { "cities" };
        match self.selection {
            Selection::All => format!("{} {}", count, noun),
            Selection::Only(c) => format!("{} {} in {}", count, noun, c.display_name()),
        }
    }

    /// フィルタ結果が空か（空状態フォールバック条件）
    pub fn is_empty(&self) -> bool {
        self.filtered_cities().is_empty()
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
