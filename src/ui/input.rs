//! 键盘/鼠标事件映射 (Input -> Action)

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::state::App;
use crate::models::NumButton;

/// 按键对应的 Action
pub fn get_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::ToggleDedup),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Press(NumButton::Clear)),
        KeyCode::Esc | KeyCode::Delete | KeyCode::Backspace => {
            Some(Action::Press(NumButton::Clear))
        }
        KeyCode::Char(c) => NumButton::from_digit(c).map(Action::Press),
        _ => None,
    }
}

/// 鼠标左键点击按钮
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.button_at(mouse.column, mouse.row).map(Action::Press)
        }
        _ => None,
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

/// 处理终端事件，返回是否退出
pub fn handle_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key.code),
        Event::Mouse(mouse) => match get_mouse_action(app, mouse) {
            Some(action) => app.dispatch(action),
            None => false,
        },
        _ => false,
    }
}
