//! 单选容器
//!
//! 每次选择都是终结操作：立即发布结果并关闭

use tracing::debug;

use super::Reducer;
use super::effect::Effect;
use super::search::SearchState;
use crate::models::{ItemCollection, SelectableItem};

/// 单选操作
#[derive(Debug, Clone, PartialEq)]
pub enum SingleAction<T> {
    Dismiss,
    SetSelectedItem(T),
    UpdateSearchText(String),
}

/// 单选状态
#[derive(Debug, Clone)]
pub struct SingleSelection<T: SelectableItem> {
    title: String,
    search: SearchState<T>,
    selected_item: Option<T>,
}

impl<T: SelectableItem> SingleSelection<T> {
    pub fn new(title: impl Into<String>, items: ItemCollection<T>, selected_item: Option<T>) -> Self {
        Self {
            title: title.into(),
            search: SearchState::new(items),
            selected_item,
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

    pub fn selected_item(&self) -> Option<&T> {
        self.selected_item.as_ref()
    }

    pub fn is_item_selected(&self, item: &T) -> bool {
        self.selected_item
            .as_ref()
            .is_some_and(|selected| selected.id() == item.id())
    }
}

impl<T: SelectableItem> Reducer for SingleSelection<T> {
    type Action = SingleAction<T>;
    type Output = Option<T>;

    fn reduce(&mut self, action: SingleAction<T>) -> Vec<Effect<Option<T>>> {
        match action {
            SingleAction::Dismiss => vec![Effect::Dismiss],

            SingleAction::SetSelectedItem(item) => {
                if self.is_item_selected(&item) {
                    debug!(id = ?item.id(), "clearing single selection");
                    self.selected_item = None;
                } else {
                    debug!(id = ?item.id(), "setting single selection");
                    self.selected_item = Some(item);
                }
                vec![
                    Effect::Publish(self.selected_item.clone()),
                    Effect::Dismiss,
                ]
            }

            SingleAction::UpdateSearchText(text) => {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    fn picker(selected: Option<Entry>) -> SingleSelection<Entry> {
        SingleSelection::new(
            "Pick one",
            vec![Entry::with_id("x", "X-ray"), Entry::with_id("y", "Yankee")]
                .into_iter()
                .collect(),
            selected,
        )
    }

    #[test]
    fn test_select_publishes_then_dismisses() {
        let mut state = picker(None);
        let x = Entry::with_id("x", "X-ray");

        let effects = state.reduce(SingleAction::SetSelectedItem(x.clone()));

        assert_eq!(effects, vec![Effect::Publish(Some(x.clone())), Effect::Dismiss]);
        assert_eq!(state.selected_item(), Some(&x));
        assert!(state.is_item_selected(&x));
    }

    #[test]
    fn test_selecting_same_item_clears() {
        let x = Entry::with_id("x", "X-ray");
        let mut state = picker(None);

        state.reduce(SingleAction::SetSelectedItem(x.clone()));
        let effects = state.reduce(SingleAction::SetSelectedItem(x.clone()));

        assert_eq!(effects, vec![Effect::Publish(None), Effect::Dismiss]);
        assert_eq!(state.selected_item(), None);
        assert!(!state.is_item_selected(&x));
    }

    #[test]
    fn test_equality_is_by_id() {
        // 标题不同但 ID 相同，视为同一条目
        let mut state = picker(Some(Entry::with_id("x", "X-ray")));
        let renamed = Entry::with_id("x", "Xylophone");
        assert!(state.is_item_selected(&renamed));

        state.reduce(SingleAction::SetSelectedItem(renamed));
        assert_eq!(state.selected_item(), None);
    }

    #[test]
    fn test_replace_preselection() {
        let mut state = picker(Some(Entry::with_id("x", "X-ray")));
        let y = Entry::with_id("y", "Yankee");

        let effects = state.reduce(SingleAction::SetSelectedItem(y.clone()));

        assert_eq!(effects[0], Effect::Publish(Some(y.clone())));
        assert!(state.is_item_selected(&y));
        assert!(!state.is_item_selected(&Entry::with_id("x", "X-ray")));
    }

    #[test]
    fn test_dismiss_keeps_state() {
        let x = Entry::with_id("x", "X-ray");
        let mut state = picker(Some(x.clone()));

        assert_eq!(state.reduce(SingleAction::Dismiss), vec![Effect::Dismiss]);
        assert_eq!(state.selected_item(), Some(&x));
    }

    #[test]
    fn test_search_has_no_effects() {
        let mut state = picker(None);
        let effects = state.reduce(SingleAction::UpdateSearchText("YAN".to_string()));
        assert!(effects.is_empty());
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items().get_index(0).unwrap().title, "Yankee");
        assert_eq!(state.all_items().len(), 2);
    }
}
