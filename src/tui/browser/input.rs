//! 都市ブラウザの入力処理
//!
//! キー入力とナビゲーション処理。

use super::state::{BrowserApp, BrowserScreen};
use crossterm::event::KeyCode;

impl BrowserApp {
    /// 次の大陸タブへ移動
    fn next_option(&mut self) {
        self.apply_option(self.option_index + 1);
    }

    /// 前の大陸タブへ移動
    fn prev_option(&mut self) {
        let len = self.options().len();
        self.apply_option(self.option_index + len - 1);
    }

    /// 選択を上に移動
    fn select_prev(&mut self) {
        if self.filtered_len() == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(current.saturating_sub(1)));
    }

    /// 選択を下に移動
    fn select_next(&mut self) {
        let len = self.filtered_len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1).min(len - 1)));
    }

    /// 詳細画面へ遷移
    fn enter(&mut self) {
        if self.screen == BrowserScreen::CityList {
            if let Some(index) = self.list_state.selected() {
                if index < self.filtered_len() {
                    self.screen = BrowserScreen::CityDetail(index);
                }
            }
        }
    }

    /// 前の画面へ戻る（一覧からはアプリ終了）
    fn back(&mut self) {
        match self.screen {
            BrowserScreen::CityList => self.should_quit = true,
            BrowserScreen::CityDetail(_) => self.screen = BrowserScreen::CityList,
        }
    }

    /// キー入力を処理
    pub(super) fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.back(),
            KeyCode::Tab | KeyCode::Right => {
                if self.screen == BrowserScreen::CityList {
                    self.next_option();
                }
            }
            KeyCode::BackTab | KeyCode::Left => {
                if self.screen == BrowserScreen::CityList {
                    self.prev_option();
                }
            }
            KeyCode::Char('r') => {
                if self.screen == BrowserScreen::CityList {
                    self.reset_to_all();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter => self.enter(),
            _ => {}
        }
    }
}
