//! 都市ブラウザの描画

use super::state::{BrowserApp, BrowserScreen};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs};

/// 画面を描画
pub(super) fn draw(f: &mut Frame, app: &mut BrowserApp) {
    match app.screen {
        BrowserScreen::CityList => render_list_screen(f, app),
        BrowserScreen::CityDetail(index) => render_detail_screen(f, app, index),
    }
}

/// 都市一覧画面
fn render_list_screen(f: &mut Frame, app: &mut BrowserApp) {
    // レイアウト（大陸タブ + 一覧 + ヘルプ）
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 大陸タブ
            Constraint::Min(1),    // 一覧
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    // 大陸タブ
    let titles: Vec<String> = app
        .options()
        .iter()
        .map(|o| format!("{} {}", o.glyph, o.label))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.option_index)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, chunks[0]);

    if app.filtered_len() == 0 {
        render_empty_state(f, chunks[1]);
    } else {
        render_city_list(f, app, chunks[1]);
    }

    // ヘルプ
    let help = Paragraph::new(" Tab: continent · ↑/↓: move · Enter: details · r: show all · q: quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

/// 一覧のコンテンツ
fn render_city_list(f: &mut Frame, app: &mut BrowserApp, area: Rect) {
    let rows = app.city_rows();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|r| {
            let text = format!("  #{:<2} {}  {} · {}/mo", r.rank, r.name, r.country, r.cost);
            ListItem::new(text)
        })
        .collect();

    let title = format!(" {} ", app.count_label());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// 空状態のフォールバック（リセット操作の案内つき）
fn render_empty_state(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(
        "\n  😢 No cities registered for this continent yet\n\n  r: show all cities",
    )
    .block(Block::default().title(" Cities ").borders(Borders::ALL))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(content, area);
}

/// 都市詳細画面
fn render_detail_screen(f: &mut Frame, app: &mut BrowserApp, index: usize) {
    let Some(card) = app.card_at(index) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // カード
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    let safety_style = match card.safety_color {
        "success" => Style::default().fg(Color::Green),
        "warning" => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::Red),
    };

    let lines = vec![
        Line::from(format!("📍 {}  ({})", card.name, card.country)),
        Line::from(format!("#{} · {}", card.rank, card.continent)),
        Line::from(""),
        Line::from(format!("⭐ Overall:   {}", card.overall_score)),
        Line::from(format!("💵 Cost/mo:   {}", card.cost_per_month)),
        Line::from(format!("📡 Internet:  {}", card.internet_speed)),
        Line::from(format!("👍 Liked:     {}", card.liked_percentage)),
        Line::styled(format!("👮 Safety:    {}", card.safety_label), safety_style),
        Line::from(""),
        Line::from(format!("🌡️ {}   😷 {}", card.temperature, card.aqi)),
    ];

    let title = format!(" {} ", card.name);
    let detail = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(detail, chunks[0]);

    let help = Paragraph::new(" Esc: back · q: quit").style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
