//! 通用 UI 组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{NumButton, TipSlot};

/// [组件] 键盘按钮
pub fn render_key_button(frame: &mut Frame, area: Rect, button: NumButton) {
    let color = match button {
        NumButton::Clear => Color::Red,
        _ => Color::White,
    };

    let key = Paragraph::new(button.title())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(key, area);
}

/// [组件] 小费栏位
pub fn render_tip_card(frame: &mut Frame, area: Rect, slot: &TipSlot) {
    let style = match slot {
        TipSlot::Placeholder(_) => Style::default().fg(Color::Gray),
        TipSlot::Amount(_) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TipSlot::Collision => Style::default().fg(Color::DarkGray),
    };

    let card = Paragraph::new(slot.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(card, area);
}
