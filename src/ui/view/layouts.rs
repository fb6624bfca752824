//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::models::NumButton;

/// 在 `r` 中居中放置固定大小的区域，空间不足时收缩
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// 将一行键盘按钮按宽度比例切分（0 键占两格）
pub fn keypad_row(row: &[NumButton], area: Rect) -> Vec<Rect> {
    let total: u32 = row.iter().map(|b| if b.is_wide() { 2 } else { 1 }).sum();
    let constraints: Vec<Constraint> = row
        .iter()
        .map(|b| Constraint::Ratio(if b.is_wide() { 2 } else { 1 }, total))
        .collect();

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}
