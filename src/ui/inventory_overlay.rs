//! Rune inventory overlay: counts and the boosts each rarity carries.

use super::rune_panel::rarity_color;
use crate::core::Economy;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_inventory_overlay(frame: &mut Frame, economy: &Economy) {
    let boost_lines: usize = economy
        .rune_definitions()
        .iter()
        .map(|d| d.boosts.len() + 2)
        .sum();
    let area = super::centered_rect(frame.size(), 48, boost_lines as u16 + 4);
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    for (index, def) in economy.rune_definitions().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<12}", def.label),
                Style::default()
                    .fg(rarity_color(index))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("owned: {}", economy.rune_count(&def.key))),
            Span::styled(
                format!("  ({:.1}%)", economy.rune_pool().chance(index) * 100.0),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        for boost in &def.boosts {
            lines.push(Line::from(Span::styled(
                format!(
                    "    x{:.2} -> {}",
                    boost.multiplier,
                    economy.tier_name(boost.tier_index)
                ),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "[I/Esc] Close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .title(" Rune Inventory ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(paragraph, area);
}
