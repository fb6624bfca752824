//! App 状态定义 (Model)

use ratatui::layout::{Position, Rect};

use crate::models::{BillState, NumButton};

/// 应用状态
pub struct App {
    pub bill: BillState,
    /// 上一次渲染时各按钮所在区域
    pub keypad_areas: Vec<(Rect, NumButton)>,
    pub message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(bill: BillState) -> Self {
        Self {
            bill,
            keypad_areas: Vec::new(),
            message: None,
        }
    }

    /// 查找坐标处的按钮
    pub fn button_at(&self, column: u16, row: u16) -> Option<NumButton> {
        let position = Position::new(column, row);
        self.keypad_areas
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, button)| *button)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(BillState::default())
    }
}
