//! Debug panel rendering.

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Render the debug panel overlay
pub fn render_debug_panel(frame: &mut Frame, area: Rect, app: &App) {
    let panel = &app.debug_panel;
    let panel_height = (panel.inputs.len() + 4) as u16;
    let panel_area = super::centered_rect(area, 44, panel_height);

    frame.render_widget(Clear, panel_area);

    let block = Block::default()
        .title(" Testing Panel ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(panel_area);
    frame.render_widget(block, panel_area);

    let items: Vec<ListItem> = panel
        .inputs
        .iter()
        .enumerate()
        .map(|(i, input)| {
            let selected = i == panel.selected_index;
            let prefix = if selected { "> " } else { "  " };
            let cursor = if selected { "_" } else { "" };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(
                "{}{:<10} count: {}{}",
                prefix,
                app.economy.tier_name(i),
                input,
                cursor
            ))
            .style(style)
        })
        .collect();

    frame.render_widget(List::new(items), inner);

    if inner.height > panel.inputs.len() as u16 {
        let help_area = Rect {
            x: inner.x,
            y: inner.y + inner.height - 1,
            width: inner.width,
            height: 1,
        };
        let help = Paragraph::new("[Enter] Apply  [C] Clear  [`] Close")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, help_area);
    }
}
