use super::*;
use crate::catalog::{Catalog, CityRecord};
use crate::continent::{Continent, Selection};
use crate::safety::Safety;
use crossterm::event::KeyCode;

fn make_city(id: &str, rank: u32, name: &str, continent: Continent) -> CityRecord {
    CityRecord {
        id: id.to_string(),
        rank,
        name: name.to_string(),
        country: "Testland".to_string(),
        continent,
        image_path: format!("city/{}.jpg", id),
        overall_score: 4.0,
        cost_per_month: 1500,
        internet_speed: 30,
        liked_percentage: 90,
        safety: Safety::High,
        temperature: 20,
        aqi: 40,
    }
}

fn builtin_app() -> BrowserApp {
    BrowserApp::new(crate::view::CityView::new(Catalog::builtin()))
}

/// Oceania を含まないフィクスチャ
fn sparse_app() -> BrowserApp {
    let catalog = Catalog::from_records(vec![
        make_city("1", 1, "Alpha", Continent::Asia),
        make_city("2", 2, "Beta", Continent::Europe),
    ]);
    BrowserApp::new(crate::view::CityView::new(catalog))
}

// ========================================
// initial state tests
// ========================================

#[test]
fn test_new_starts_unfiltered_with_cursor_on_first_row() {
    let app = builtin_app();

    assert_eq!(app.view.selection(), Selection::All);
    assert_eq!(app.screen, BrowserScreen::CityList);
    assert_eq!(app.option_index, 0);
    assert_eq!(app.list_state.selected(), Some(0));
    assert!(!app.should_quit);
}

#[test]
fn test_city_rows_follow_catalog_order() {
    let app = builtin_app();
    let rows = app.city_rows();

    assert_eq!(rows.len(), 16);
    assert_eq!(rows[0].name, "Bangkok");
    assert_eq!(rows[0].cost, "$1,579");
    assert_eq!(rows[15].name, "Melbourne");
}

// ========================================
// continent tab tests
// ========================================

#[test]
fn test_apply_option_filters_view() {
    let mut app = builtin_app();

    // オプション2番目 = Asia
    app.apply_option(1);
    assert_eq!(app.view.selection(), Selection::Only(Continent::Asia));
    assert_eq!(app.filtered_len(), 5);
    assert_eq!(app.list_state.selected(), Some(0));
}

#[test]
fn test_tab_key_cycles_through_options() {
    let mut app = builtin_app();
    let option_count = app.options().len();

    for _ in 0..option_count {
        app.handle_key(KeyCode::Tab);
    }

    // 一周して All に戻る
    assert_eq!(app.option_index, 0);
    assert_eq!(app.view.selection(), Selection::All);
}

#[test]
fn test_back_tab_wraps_to_last_option() {
    let mut app = builtin_app();
    app.handle_key(KeyCode::BackTab);

    assert_eq!(app.option_index, app.options().len() - 1);
    assert_eq!(app.view.selection(), Selection::Only(Continent::Oceania));
}

#[test]
fn test_count_label_follows_selection() {
    let mut app = builtin_app();
    assert_eq!(app.count_label(), "16 cities");

    app.apply_option(2); // Europe
    assert_eq!(app.count_label(), "5 cities in Europe");
}

// ========================================
// empty-state tests
// ========================================

#[test]
fn test_empty_continent_clears_cursor() {
    let mut app = sparse_app();

    // 最後のオプション = Oceania、フィクスチャに該当都市なし
    app.apply_option(app.options().len() - 1);

    assert_eq!(app.filtered_len(), 0);
    assert_eq!(app.list_state.selected(), None);
}

#[test]
fn test_reset_key_restores_full_catalog() {
    let mut app = sparse_app();
    app.apply_option(app.options().len() - 1);
    assert_eq!(app.filtered_len(), 0);

    app.handle_key(KeyCode::Char('r'));

    assert_eq!(app.view.selection(), Selection::All);
    assert_eq!(app.filtered_len(), 2);
    assert_eq!(app.list_state.selected(), Some(0));
}

#[test]
fn test_enter_is_ignored_on_empty_list() {
    let mut app = sparse_app();
    app.apply_option(app.options().len() - 1);

    app.handle_key(KeyCode::Enter);

    assert_eq!(app.screen, BrowserScreen::CityList);
}

// ========================================
// navigation tests
// ========================================

#[test]
fn test_cursor_moves_within_bounds() {
    let mut app = sparse_app();

    app.handle_key(KeyCode::Down);
    assert_eq!(app.list_state.selected(), Some(1));

    // 末尾で止まる
    app.handle_key(KeyCode::Down);
    assert_eq!(app.list_state.selected(), Some(1));

    app.handle_key(KeyCode::Up);
    assert_eq!(app.list_state.selected(), Some(0));

    // 先頭で止まる
    app.handle_key(KeyCode::Up);
    assert_eq!(app.list_state.selected(), Some(0));
}

#[test]
fn test_enter_opens_detail_and_esc_returns() {
    let mut app = builtin_app();

    app.handle_key(KeyCode::Down);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.screen, BrowserScreen::CityDetail(1));

    app.handle_key(KeyCode::Esc);
    assert_eq!(app.screen, BrowserScreen::CityList);
}

#[test]
fn test_tab_is_ignored_on_detail_screen() {
    let mut app = builtin_app();
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.screen, BrowserScreen::CityDetail(0));

    app.handle_key(KeyCode::Tab);
    assert_eq!(app.view.selection(), Selection::All);
    assert_eq!(app.screen, BrowserScreen::CityDetail(0));
}

#[test]
fn test_card_at_resolves_filtered_index() {
    let mut app = builtin_app();
    app.apply_option(2); // Europe

    let card = app.card_at(0).unwrap();
    assert_eq!(card.name, "Lisbon");

    assert!(app.card_at(99).is_none());
}

// ========================================
// quit tests
// ========================================

#[test]
fn test_quit_key() {
    let mut app = builtin_app();
    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_esc_from_list_quits() {
    let mut app = builtin_app();
    app.handle_key(KeyCode::Esc);
    assert!(app.should_quit);
}
