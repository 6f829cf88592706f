//! 多选容器
//!
//! 切换选中状态不会通知宿主，只有确认（完成）才发布结果

use tracing::debug;

use super::Reducer;
use super::effect::Effect;
use super::search::SearchState;
use crate::models::{ItemCollection, SelectableItem};

/// 多选操作
#[derive(Debug, Clone, PartialEq)]
pub enum MultiAction<T> {
    Dismiss,
    SetSelectedItem(T),
    SelectAllItems,
    DeselectAllItems,
    ConfirmSelection,
    UpdateSearchText(String),
}

/// 多选状态
#[derive(Debug, Clone)]
pub struct MultiSelection<T: SelectableItem> {
    title: String,
    search: SearchState<T>,
    selected_items: ItemCollection<T>,
}

impl<T: SelectableItem> MultiSelection<T> {
    pub fn new(
        title: impl Into<String>,
        items: ItemCollection<T>,
        selected_items: ItemCollection<T>,
    ) -> Self {
        Self {
            title: title.into(),
            search: SearchState::new(items),
            selected_items,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// 当前显示的条目
    pub fn items(&self) -> &ItemCollection<T> {
        self.search.items()
    }

    pub fn all_items(&self) -> &ItemCollection<T> {
        self.search.all_items()
    }

    pub fn search_text(&self) -> &str {
        self.search.search_text()
    }

    pub fn selected_items(&self) -> &ItemCollection<T> {
        &self.selected_items
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_items.is_empty()
    }

    pub fn is_item_selected(&self, item: &T) -> bool {
        self.selected_items.contains(&item.id())
    }

    /// 选中集合与当前显示的条目完全一致（忽略顺序）
    pub fn is_all_items_selected(&self) -> bool {
        self.selected_items.same_members(self.items())
    }

    fn toggle(&mut self, item: T) {
        let id = item.id();
        if self.selected_items.remove(&id).is_none() {
            self.selected_items.push(item);
        }
    }
}

impl<T: SelectableItem> Reducer for MultiSelection<T> {
    type Action = MultiAction<T>;
    type Output = ItemCollection<T>;

    fn reduce(&mut self, action: MultiAction<T>) -> Vec<Effect<ItemCollection<T>>> {
        match action {
            MultiAction::Dismiss => vec![Effect::Dismiss],

            MultiAction::SetSelectedItem(item) => {
                debug!(id = ?item.id(), "toggling item");
                self.toggle(item);
                Vec::new()
            }

            MultiAction::SelectAllItems => {
                self.selected_items = self.search.items().clone();
                debug!(count = self.selected_items.len(), "selected all shown items");
                Vec::new()
            }

            MultiAction::DeselectAllItems => {
                self.selected_items.clear();
                debug!("cleared selection");
                Vec::new()
            }

            MultiAction::ConfirmSelection => vec![
                Effect::Publish(self.selected_items.clone()),
                Effect::Dismiss,
            ],

            MultiAction::UpdateSearchText(text) => {
                self.search.update_search_text(text);
                debug!(
                    query = %self.search.search_text(),
                    shown = self.items().len(),
                    "search text updated"
                );
                Vec::new()
            }
        }
    }
}
