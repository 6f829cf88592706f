//! 搜索过滤
//!
//! 搜索文本为空时显示全部条目，否则显示标题包含搜索文本（忽略大小写）的条目

use crate::models::{ItemCollection, SelectableItem};

/// 标题是否包含查询文本（忽略大小写）
pub fn title_matches(title: &str, query: &str) -> bool {
    title.to_lowercase().contains(&query.to_lowercase())
}

/// 全部条目、过滤结果与搜索文本
#[derive(Debug, Clone)]
pub struct SearchState<T: SelectableItem> {
    all_items: ItemCollection<T>,
    filtered_items: ItemCollection<T>,
    search_text: String,
}

impl<T: SelectableItem> SearchState<T> {
    pub fn new(items: ItemCollection<T>) -> Self {
        Self {
            all_items: items,
            filtered_items: ItemCollection::new(),
            search_text: String::new(),
        }
    }

    /// 更新搜索文本；仅在非空时重新计算过滤结果
    pub fn update_search_text(&mut self, text: String) {
        self.search_text = text;
        if self.search_text.is_empty() {
            return;
        }

        let query = &self.search_text;
        self.filtered_items = self
            .all_items
            .filtered(|item| title_matches(item.title(), query));
    }

    /// 当前显示的条目
    pub fn items(&self) -> &ItemCollection<T> {
        if self.search_text.is_empty() {
            &self.all_items
        } else {
            &self.filtered_items
        }
    }

    pub fn all_items(&self) -> &ItemCollection<T> {
        &self.all_items
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_filtering(&self) -> bool {
        !self.search_text.is_empty()
    }
}
