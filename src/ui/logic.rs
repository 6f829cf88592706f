//! 业务逻辑处理 (Update/Dispatch)
//!
//! 把界面 Action 翻译为单选/多选容器的 Action

use super::actions::Action;
use super::state::{App, InputMode, Picker};
use crate::models::SelectableItem;
use crate::selection::{MultiAction, SingleAction};

impl<T: SelectableItem> App<T> {
    /// 核心逻辑分发，返回展示是否已结束
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => self.dismiss(),
            Action::MoveCursorUp => self.move_up(),
            Action::MoveCursorDown => self.move_down(),

            Action::ToggleItem => self.toggle_item(),
            Action::ToggleAll => self.toggle_all(),
            Action::Confirm => self.confirm(),

            Action::StartSearch => {
                self.mode = InputMode::Searching;
                self.message = None;
            }
            Action::FinishSearch => self.mode = InputMode::Browsing,
            Action::ClearSearch => {
                self.update_search_text(String::new());
                self.mode = InputMode::Browsing;
            }
            Action::Input(c) => {
                if self.mode == InputMode::Searching {
                    let mut text = self.picker.search_text().to_string();
                    text.push(c);
                    self.update_search_text(text);
                }
            }
            Action::DeleteChar => {
                if self.mode == InputMode::Searching {
                    let mut text = self.picker.search_text().to_string();
                    if text.pop().is_some() {
                        self.update_search_text(text);
                    }
                }
            }
        }
        self.picker.is_dismissed()
    }

    // ============ 导航相关 ============

    /// 向上移动光标
    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// 向下移动光标
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.picker.items().len() {
            self.cursor += 1;
        }
    }

    // ============ 选择相关 ============

    /// 切换光标所在条目
    pub fn toggle_item(&mut self) {
        let Some(item) = self.item_under_cursor().cloned() else {
            return;
        };
        match &mut self.picker {
            Picker::Single(store) => store.send(SingleAction::SetSelectedItem(item)),
            Picker::Multi(store) => store.send(MultiAction::SetSelectedItem(item)),
        }
        self.message = None;
    }

    /// 全选 / 取消全选
    pub fn toggle_all(&mut self) {
        if let Picker::Multi(store) = &mut self.picker {
            if store.state().is_all_items_selected() {
                store.send(MultiAction::DeselectAllItems);
                self.message = Some("已取消全选".to_string());
            } else {
                store.send(MultiAction::SelectAllItems);
                self.message = Some(format!("已选择 {} 项", store.state().selected_items().len()));
            }
        }
    }

    /// 完成：没有选中任何条目时不可用
    pub fn confirm(&mut self) {
        if let Picker::Multi(store) = &mut self.picker {
            if store.state().has_selection() {
                store.send(MultiAction::ConfirmSelection);
            } else {
                self.message = Some("请至少选择一项".to_string());
            }
        }
    }

    /// 关闭，不发布结果
    pub fn dismiss(&mut self) {
        match &mut self.picker {
            Picker::Single(store) => store.send(SingleAction::Dismiss),
            Picker::Multi(store) => store.send(MultiAction::Dismiss),
        }
    }

    // ============ 搜索相关 ============

    fn update_search_text(&mut self, text: String) {
        match &mut self.picker {
            Picker::Single(store) => store.send(SingleAction::UpdateSearchText(text)),
            Picker::Multi(store) => store.send(MultiAction::UpdateSearchText(text)),
        }
        self.cursor = 0;
        self.clamp_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, ItemCollection};
    use crate::selection::{Callbacks, MultiSelection, SingleSelection, Store};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fruits() -> ItemCollection<Entry> {
        vec![
            Entry::with_id("a", "Apple"),
            Entry::with_id("b", "Banana"),
            Entry::with_id("g", "Grape"),
        ]
        .into_iter()
        .collect()
    }

    fn multi_app(published: Rc<RefCell<Vec<Vec<String>>>>) -> App<Entry> {
        let store = Store::new(
            MultiSelection::new("Fruits", fruits(), ItemCollection::new()),
            Callbacks::new(
                move |items: ItemCollection<Entry>| {
                    published.borrow_mut().push(items.ids().cloned().collect())
                },
                || {},
            ),
        );
        App::new(Picker::Multi(store))
    }

    fn type_text(app: &mut App<Entry>, text: &str) {
        app.dispatch(Action::StartSearch);
        for c in text.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = multi_app(Rc::default());
        app.dispatch(Action::MoveCursorUp);
        assert_eq!(app.cursor, 0);
        for _ in 0..5 {
            app.dispatch(Action::MoveCursorDown);
        }
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_search_resets_cursor() {
        let mut app = multi_app(Rc::default());
        app.dispatch(Action::MoveCursorDown);
        app.dispatch(Action::MoveCursorDown);

        type_text(&mut app, "AN");
        assert_eq!(app.picker.search_text(), "AN");
        assert_eq!(app.cursor, 0);
        assert_eq!(app.item_under_cursor().unwrap().title, "Banana");

        app.dispatch(Action::DeleteChar);
        assert_eq!(app.picker.search_text(), "A");
        app.dispatch(Action::ClearSearch);
        assert_eq!(app.picker.items().len(), 3);
        assert_eq!(app.mode, InputMode::Browsing);
    }

    #[test]
    fn test_confirm_requires_selection() {
        let published = Rc::new(RefCell::new(Vec::new()));
        let mut app = multi_app(Rc::clone(&published));

        assert!(!app.dispatch(Action::Confirm));
        assert!(app.message.is_some());
        assert!(published.borrow().is_empty());

        app.dispatch(Action::MoveCursorDown);
        app.dispatch(Action::ToggleItem);
        assert!(app.dispatch(Action::Confirm));
        assert_eq!(*published.borrow(), vec![vec!["b".to_string()]]);
    }

    #[test]
    fn test_toggle_all_flips() {
        let mut app = multi_app(Rc::default());
        app.dispatch(Action::ToggleAll);
        assert_eq!(app.picker.selected_count(), 3);
        app.dispatch(Action::ToggleAll);
        assert_eq!(app.picker.selected_count(), 0);
    }

    #[test]
    fn test_single_toggle_ends_presentation() {
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&published);
        let store = Store::new(
            SingleSelection::new("Fruits", fruits(), None),
            Callbacks::new(
                move |item: Option<Entry>| sink.borrow_mut().push(item.map(|e| e.title)),
                || {},
            ),
        );
        let mut app = App::new(Picker::Single(store));

        app.dispatch(Action::MoveCursorDown);
        assert!(app.dispatch(Action::ToggleItem));
        assert_eq!(*published.borrow(), vec![Some("Banana".to_string())]);
    }

    #[test]
    fn test_quit_dismisses_without_publishing() {
        let published = Rc::new(RefCell::new(Vec::new()));
        let mut app = multi_app(Rc::clone(&published));
        app.dispatch(Action::ToggleItem);
        assert!(app.dispatch(Action::Quit));
        assert!(published.borrow().is_empty());
    }
}
