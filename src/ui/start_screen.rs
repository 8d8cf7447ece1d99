//! Start screen: explains the controls. The session clock starts on Enter.

use crate::app::App;
use crate::build_info;
use crate::utils::fmt_count;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn draw_start_screen(frame: &mut Frame, app: &App) {
    let area = super::centered_rect(frame.size(), 64, 20);
    frame.render_widget(Clear, area);

    let economy = &app.economy;
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Tiered Incremental",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Buy {} with coins. Each higher tier costs the tier below it",
            economy.tier_name(0)
        )),
        Line::from("and slowly produces more of it. Buying a higher tier resets"),
        Line::from("everything below it."),
        Line::from(""),
        Line::from(vec![key("  ↑/↓ Enter  "), Span::raw("Select and buy a tier")]),
        Line::from(vec![key("  1-9, 0     "), Span::raw("Buy tier 1-10 directly")]),
        Line::from(vec![
            key("  R          "),
            Span::raw(format!(
                "Roll a rune ({} {})",
                fmt_count(economy.roll_cost()),
                economy.tier_name(0)
            )),
        ]),
        Line::from(vec![key("  I          "), Span::raw("Rune inventory")]),
        Line::from(vec![key("  Q          "), Span::raw("Quit")]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            build_info::version_line(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(paragraph, area);
}
