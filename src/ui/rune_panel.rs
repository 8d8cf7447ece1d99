use crate::app::App;
use crate::utils::fmt_count;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Color for a rarity, by position in the pool (rarer entries come later).
pub(crate) fn rarity_color(index: usize) -> Color {
    match index {
        0 => Color::White,
        1 => Color::Green,
        2 => Color::Blue,
        3 => Color::Magenta,
        4 => Color::Yellow,
        _ => Color::LightRed,
    }
}

pub fn draw_rune_panel(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    draw_roll_box(frame, chunks[0], app);
    draw_inventory_list(frame, chunks[1], app);
}

fn draw_roll_box(frame: &mut Frame, area: Rect, app: &App) {
    let economy = &app.economy;
    let affordable = economy
        .tier(0)
        .map(|t| t.amount >= economy.roll_cost())
        .unwrap_or(false);

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "Cost: {} {}",
                fmt_count(economy.roll_cost()),
                economy.tier_name(0)
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "[R] Roll Rune",
            if affordable {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        )),
    ];
    if let Some(last) = &app.last_roll {
        lines.push(Line::from(Span::styled(
            last.as_str(),
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Roll a Rune "));
    frame.render_widget(paragraph, area);
}

fn draw_inventory_list(frame: &mut Frame, area: Rect, app: &App) {
    let economy = &app.economy;
    let mut lines: Vec<Line> = economy
        .rune_definitions()
        .iter()
        .enumerate()
        .map(|(index, def)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<10}", def.label),
                    Style::default()
                        .fg(rarity_color(index))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {}", economy.rune_count(&def.key))),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[I] Open inventory",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Runes "));
    frame.render_widget(paragraph, area);
}
