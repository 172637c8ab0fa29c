//! 都市ブラウザの状態管理
//!
//! アプリケーション状態と画面の定義。

use crate::card::{format_usd, CityCard};
use crate::continent::ContinentOption;
use crate::view::CityView;
use ratatui::widgets::ListState;

// ============================================================================
// View 用データ型（ドメイン構造を隠蔽）
// ============================================================================

/// 一覧行の表示用データ
pub(super) struct CityRow {
    pub rank: u32,
    pub name: String,
    pub country: String,
    pub cost: String,
}

/// 画面状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BrowserScreen {
    /// 都市一覧
    CityList,
    /// 都市詳細（フィルタ済みリスト内のインデックス）
    CityDetail(usize),
}

/// アプリケーション状態
pub(super) struct BrowserApp {
    pub(super) view: CityView,
    pub(super) screen: BrowserScreen,
    pub(super) option_index: usize,
    pub(super) list_state: ListState,
    pub(super) should_quit: bool,
}

impl BrowserApp {
    /// 新しいアプリケーション状態を作成
    pub(super) fn new(view: CityView) -> Self {
        let mut list_state = ListState::default();
        if !view.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            view,
            screen: BrowserScreen::CityList,
            option_index: 0,
            list_state,
            should_quit: false,
        }
    }

    /// フィルタオプション一覧を取得
    pub(super) fn options(&self) -> &'static [ContinentOption] {
        self.view.catalog().continent_options()
    }

    /// オプションインデックスの選択を適用
    pub(super) fn apply_option(&mut self, index: usize) {
        let options = self.options();
        let index = index % options.len();
        self.option_index = index;
        self.view.select(options[index].selection);
        self.reset_cursor();
    }

    /// 選択を All に戻す（空状態のリセット操作）
    pub(super) fn reset_to_all(&mut self) {
        self.apply_option(0);
    }

    /// フィルタ変更後にカーソルを先頭へ戻す
    fn reset_cursor(&mut self) {
        if self.view.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    // ========================================================================
    // View 用読み取り関数（ドメイン構造を隠蔽）
    // ========================================================================

    /// 一覧行の表示用データを取得
    pub(super) fn city_rows(&self) -> Vec<CityRow> {
        self.view
            .filtered_cities()
            .iter()
            .map(|c| CityRow {
                rank: c.rank,
                name: c.name.clone(),
                country: c.country.clone(),
                cost: format_usd(c.cost_per_month),
            })
            .collect()
    }

    /// フィルタ済み件数を取得
    pub(super) fn filtered_len(&self) -> usize {
        self.view.filtered_cities().len()
    }

    /// 件数ラベルを取得
    pub(super) fn count_label(&self) -> String {
        self.view.count_label()
    }

    /// 詳細画面用のカードを取得
    pub(super) fn card_at(&self, index: usize) -> Option<CityCard> {
        self.view
            .filtered_cities()
            .get(index)
            .map(|c| CityCard::from_record(c))
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
