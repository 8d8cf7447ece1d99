pub mod debug_panel_scene;
pub mod inventory_overlay;
mod rune_panel;
pub mod start_screen;
mod tier_panel;

use crate::app::App;
use crate::input::{Overlay, Screen};
use crate::utils::fmt_count;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws whichever screen is active plus any open overlay.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Start => start_screen::draw_start_screen(frame, app),
        Screen::Game => draw_game(frame, app),
    }
}

fn draw_game(frame: &mut Frame, app: &App) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header: coins and coins/sec
            Constraint::Min(0),    // Tiers + runes
            Constraint::Length(7), // Activity log
            Constraint::Length(3), // Footer
        ])
        .split(size);

    draw_header(frame, v_chunks[0], app);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(v_chunks[1]);

    tier_panel::draw_tier_panel(frame, chunks[0], app);
    rune_panel::draw_rune_panel(frame, chunks[1], app);
    draw_activity_log(frame, v_chunks[2], app);
    draw_footer(frame, v_chunks[3], app);

    match app.overlay {
        Overlay::None => {}
        Overlay::Inventory => inventory_overlay::draw_inventory_overlay(frame, &app.economy),
        Overlay::Debug => debug_panel_scene::render_debug_panel(frame, size, app),
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let economy = &app.economy;
    let mut spans = vec![
        Span::styled("Coins: ", Style::default().fg(Color::Gray)),
        Span::styled(
            fmt_count(economy.currency()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("Coins/sec: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.2}", economy.coins_per_second()),
            Style::default().fg(Color::Green),
        ),
    ];
    if app.debug_enabled {
        spans.push(Span::raw("    "));
        spans.push(Span::styled(
            "[DEBUG]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Tierforge ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(header, area);
}

fn draw_activity_log(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .activity
        .entries()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == 0 {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(entry.as_str(), style))
        })
        .collect();

    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Activity "));
    frame.render_widget(log, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut hints = vec![
        ("[↑/↓]", "Select"),
        ("[Enter]", "Buy"),
        ("[1-0]", "Buy tier"),
        ("[R]", "Roll rune"),
        ("[I]", "Inventory"),
    ];
    if app.debug_enabled {
        hints.push(("[`]", "Debug"));
    }
    hints.push(("[Q]", "Quit"));

    let spans: Vec<Span> = hints
        .into_iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(key, Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {}  ", label)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Centered rect of at most `width` x `height` inside `area`.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}
