//! 视图层模块
//!
//! 自上而下：设置提示、小费栏、硬币、账单、键盘、帮助

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::App;
use crate::models::{Coin, NumButton};
use components::{render_key_button, render_tip_card};
use layouts::{centered_rect, keypad_row};

const PANEL_WIDTH: u16 = 40;
const PANEL_HEIGHT: u16 = 25;
const KEY_HEIGHT: u16 = 3;

/// 渲染 UI，并记录按钮区域
pub fn render(frame: &mut Frame, app: &mut App) {
    let panel = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, frame.area());
    let block = Block::default()
        .title(" 💰 小费计算器 ")
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // 设置
            Constraint::Length(3),              // 小费
            Constraint::Length(1),              // 硬币
            Constraint::Length(3),              // 账单
            Constraint::Length(KEY_HEIGHT * 4), // 键盘
            Constraint::Min(1),                 // 帮助
        ])
        .split(inner);

    render_settings(frame, app, chunks[0]);
    render_tips(frame, app, chunks[1]);
    render_coins(frame, chunks[2]);
    render_bill(frame, app, chunks[3]);
    render_keypad(frame, app, chunks[4]);
    render_help(frame, app, chunks[5]);
}

fn three_columns(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area)
        .to_vec()
}

fn render_settings(frame: &mut Frame, app: &App, area: Rect) {
    let state = if app.bill.dedup() { "开" } else { "关" };
    let line = Line::from(vec![
        Span::styled("[s] 设置", Style::default().fg(Color::Gray)),
        Span::raw(format!("  去重: {state}")),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}

fn render_tips(frame: &mut Frame, app: &App, area: Rect) {
    for (slot, cell) in app.bill.tips().iter().zip(three_columns(area)) {
        render_tip_card(frame, cell, slot);
    }
}

fn render_coins(frame: &mut Frame, area: Rect) {
    for (coin, cell) in Coin::ALL.iter().zip(three_columns(area)) {
        let glyph = Paragraph::new(coin.glyph())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(glyph, cell);
    }
}

fn render_bill(frame: &mut Frame, app: &App, area: Rect) {
    let bill = Paragraph::new(app.bill.display())
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(bill, area);
}

fn render_keypad(frame: &mut Frame, app: &mut App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(KEY_HEIGHT); 4])
        .split(area);

    app.keypad_areas.clear();
    for (row, row_area) in NumButton::KEYPAD.iter().zip(rows.iter()) {
        for (button, cell) in row.iter().zip(keypad_row(row, *row_area)) {
            render_key_button(frame, cell, *button);
            app.keypad_areas.push((cell, *button));
        }
    }
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let text = match &app.message {
        Some(message) => message.clone(),
        None => "[0-9] 输入  [c] 清除  [q] 退出".to_string(),
    };

    let help = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(help, area);
}
