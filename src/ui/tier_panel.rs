use crate::app::App;
use crate::utils::{fmt_boost, fmt_count};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Tier table: count, next price in the paying resource, rune boost, and
/// units granted per purchase.
pub fn draw_tier_panel(frame: &mut Frame, area: Rect, app: &App) {
    let economy = &app.economy;

    let rows: Vec<Row> = economy
        .tiers()
        .iter()
        .enumerate()
        .map(|(index, tier)| {
            let paying = if index == 0 {
                "coins".to_string()
            } else {
                economy.tier_name(index - 1)
            };
            let affordable = if index == 0 {
                economy.currency() >= tier.current_price as f64
            } else {
                economy.tiers()[index - 1].amount >= tier.current_price as f64
            };
            let cost_style = if affordable {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let multiplier = economy.effective_multiplier(index);
            let boost_style = if multiplier > 1.0 {
                Style::default().fg(Color::LightCyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let marker = if index == app.selected_tier { "> " } else { "  " };
            let row = Row::new(vec![
                Cell::from(format!("{}{}", marker, economy.tier_name(index))),
                Cell::from(fmt_count(tier.amount)),
                Cell::from(format!("{} {}", tier.current_price, paying)).style(cost_style),
                Cell::from(fmt_boost(multiplier)).style(boost_style),
                Cell::from(format!("+{:.3}", economy.purchase_amount(index))),
            ]);
            if index == app.selected_tier {
                row.style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                row
            }
        })
        .collect();

    let header = Row::new(vec!["Tier", "Count", "Cost", "Boost", "Per buy"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::UNDERLINED),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Min(12),
            Constraint::Length(18),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(Block::default().borders(Borders::ALL).title(" Tiers "));

    frame.render_widget(table, area);
}
