//! App 状态定义 (Model)
//!
//! 界面只持有光标、输入模式与提示信息；选择状态全部在 Store 里

use crate::models::{ItemCollection, SelectableItem};
use crate::selection::{MultiSelection, SingleSelection, Store};

/// 单选或多选
pub enum Picker<T: SelectableItem> {
    Single(Store<SingleSelection<T>>),
    Multi(Store<MultiSelection<T>>),
}

impl<T: SelectableItem> Picker<T> {
    pub fn title(&self) -> &str {
        match self {
            Picker::Single(store) => store.state().title(),
            Picker::Multi(store) => store.state().title(),
        }
    }

    /// 当前显示的条目
    pub fn items(&self) -> &ItemCollection<T> {
        match self {
            Picker::Single(store) => store.state().items(),
            Picker::Multi(store) => store.state().items(),
        }
    }

    pub fn all_items(&self) -> &ItemCollection<T> {
        match self {
            Picker::Single(store) => store.state().all_items(),
            Picker::Multi(store) => store.state().all_items(),
        }
    }

    pub fn search_text(&self) -> &str {
        match self {
            Picker::Single(store) => store.state().search_text(),
            Picker::Multi(store) => store.state().search_text(),
        }
    }

    pub fn is_item_selected(&self, item: &T) -> bool {
        match self {
            Picker::Single(store) => store.state().is_item_selected(item),
            Picker::Multi(store) => store.state().is_item_selected(item),
        }
    }

    pub fn selected_count(&self) -> usize {
        match self {
            Picker::Single(store) => usize::from(store.state().selected_item().is_some()),
            Picker::Multi(store) => store.state().selected_items().len(),
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Picker::Multi(_))
    }

    pub fn is_dismissed(&self) -> bool {
        match self {
            Picker::Single(store) => store.is_dismissed(),
            Picker::Multi(store) => store.is_dismissed(),
        }
    }
}

/// 输入模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browsing,
    Searching,
}

/// 应用状态
pub struct App<T: SelectableItem> {
    pub picker: Picker<T>,
    pub cursor: usize,
    pub mode: InputMode,
    pub message: Option<String>,
}

impl<T: SelectableItem> App<T> {
    /// 创建新的应用实例
    pub fn new(picker: Picker<T>) -> Self {
        Self {
            picker,
            cursor: 0,
            mode: InputMode::Browsing,
            message: None,
        }
    }

    /// 显示列表变化后确保光标有效
    pub fn clamp_cursor(&mut self) {
        let len = self.picker.items().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// 获取光标所在的条目
    pub fn item_under_cursor(&self) -> Option<&T> {
        self.picker.items().get_index(self.cursor)
    }
}
