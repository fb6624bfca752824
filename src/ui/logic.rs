//! 业务逻辑处理 (Update/Dispatch)

use tracing::{debug, info};

use super::actions::Action;
use super::state::App;
use crate::models::NumButton;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                info!("quit requested");
                return true;
            }
            Action::Press(button) => self.press(button),
            Action::ToggleDedup => self.toggle_dedup(),
        }
        false
    }

    /// 处理一次按钮按下
    pub fn press(&mut self, button: NumButton) {
        let accepted = self.bill.press(button);
        if accepted {
            self.message = None;
            debug!(
                button = button.title(),
                bill = self.bill.bill(),
                tips = ?self.bill.tip_labels(),
                "button accepted"
            );
        } else {
            debug!(button = button.title(), bill = self.bill.bill(), "button ignored");
        }
    }

    /// 切换小费去重策略
    pub fn toggle_dedup(&mut self) {
        let dedup = !self.bill.dedup();
        self.bill.set_dedup(dedup);
        self.message = Some(if dedup {
            "重复小费显示为 --".to_string()
        } else {
            "显示全部小费".to_string()
        });
        info!(dedup, "tip dedup toggled");
    }
}
