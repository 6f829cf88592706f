//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, InputMode};
use crate::models::SelectableItem;

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: InputMode, is_multi: bool, key: KeyCode) -> Option<Action> {
    match mode {
        InputMode::Browsing => match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveCursorDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveCursorUp),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleItem),
            KeyCode::Char('/') => Some(Action::StartSearch),
            KeyCode::Char('a') if is_multi => Some(Action::ToggleAll),
            KeyCode::Char('d') if is_multi => Some(Action::Confirm),
            _ => None,
        },
        InputMode::Searching => match key {
            KeyCode::Esc => Some(Action::ClearSearch),
            KeyCode::Enter => Some(Action::FinishSearch),
            KeyCode::Down => Some(Action::MoveCursorDown),
            KeyCode::Up => Some(Action::MoveCursorUp),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 处理按键事件，返回是否应退出
pub fn handle_key_event<T: SelectableItem>(app: &mut App<T>, key: KeyCode) -> bool {
    match get_action(app.mode, app.picker.is_multi(), key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
