//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体，持有唯一的 BillState
//! - View (view/): 将 State 映射为 UI，并记录按钮区域供鼠标点击
//! - Intent (actions.rs): 按键/点击转化为语义化 Action

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::{handle_event, handle_key_event};
pub use state::App;
pub use view::render;
