//! Action 枚举定义 (Intent)

use crate::models::NumButton;

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Press(NumButton), // 数字键或 AC
    ToggleDedup,      // 设置：切换小费去重
}
