//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveCursorUp,
    MoveCursorDown,

    // 选择
    ToggleItem,
    ToggleAll, // 仅多选
    Confirm,   // 仅多选

    // 搜索框
    StartSearch,
    FinishSearch,
    ClearSearch,
    Input(char),
    DeleteChar,
}
