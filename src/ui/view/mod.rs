//! 视图层模块
//!
//! 纯函数：根据 App 状态渲染界面

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{App, InputMode, Picker};
use crate::models::SelectableItem;
use components::{render_input_widget, render_placeholder};

/// 渲染 UI
pub fn render<T: SelectableItem>(frame: &mut Frame, app: &App<T>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 搜索
            Constraint::Min(5),    // 列表
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_search(frame, app, chunks[1]);
    render_list(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);
}

fn render_title<T: SelectableItem>(frame: &mut Frame, app: &App<T>, area: Rect) {
    let mut spans = vec![Span::styled(
        app.picker.title().to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if app.picker.is_multi() {
        spans.push(Span::styled(
            format!("  已选 {} 项", app.picker.selected_count()),
            Style::default().fg(Color::Gray),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_search<T: SelectableItem>(frame: &mut Frame, app: &App<T>, area: Rect) {
    render_input_widget(
        frame,
        area,
        "搜索 [/]",
        app.picker.search_text(),
        app.mode == InputMode::Searching,
        Color::Yellow,
    );
}

fn render_list<T: SelectableItem>(frame: &mut Frame, app: &App<T>, area: Rect) {
    if let Some(hint) = empty_hint(&app.picker) {
        render_placeholder(frame, area, "列表", hint);
        return;
    }

    let items: Vec<ListItem> = app
        .picker
        .items()
        .iter()
        .map(|item| {
            let selected = app.picker.is_item_selected(item);
            let marker = if selected { "✓ " } else { "  " };
            let style = if selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![Span::styled(
                format!("{}{}", marker, item.title()),
                style,
            )]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title("列表").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    let mut state = ListState::default();
    state.select(Some(app.cursor));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_help<T: SelectableItem>(frame: &mut Frame, app: &App<T>, area: Rect) {
    let help_text = help_text(app);
    let text = match app.message.as_deref() {
        Some(message) if !message.is_empty() => format!("{}  |  {}", help_text, message),
        _ => help_text,
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

/// 列表为空时的提示：没有任何条目时视为加载中
pub fn empty_hint<T: SelectableItem>(picker: &Picker<T>) -> Option<&'static str> {
    if !picker.items().is_empty() {
        None
    } else if picker.all_items().is_empty() {
        Some("加载中…")
    } else {
        Some("无匹配项")
    }
}

/// 底部帮助文字
pub fn help_text<T: SelectableItem>(app: &App<T>) -> String {
    if app.mode == InputMode::Searching {
        return "输入关键字过滤  [↑/↓] 移动  [Enter] 完成搜索  [Esc] 清除".to_string();
    }

    match &app.picker {
        Picker::Single(_) => "[j/k] 移动  [Enter] 选择  [/] 搜索  [q] 关闭".to_string(),
        Picker::Multi(store) => {
            let state = store.state();
            let toggle_all = if state.is_all_items_selected() {
                "[a] 取消全选"
            } else {
                "[a] 全选"
            };
            let done = if state.has_selection() {
                "[d] 完成"
            } else {
                "[d] 完成 (未选择)"
            };
            format!(
                "[j/k] 移动  [Space] 勾选  {}  {}  [/] 搜索  [q] 关闭",
                toggle_all, done
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, ItemCollection};
    use crate::selection::{Callbacks, MultiSelection, SingleSelection, Store};
    use crate::ui::actions::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn fruits() -> ItemCollection<Entry> {
        vec![
            Entry::with_id("a", "Apple"),
            Entry::with_id("b", "Banana"),
            Entry::with_id("g", "Grape"),
        ]
        .into_iter()
        .collect()
    }

    fn multi_app(items: ItemCollection<Entry>) -> App<Entry> {
        let store = Store::new(
            MultiSelection::new("Fruits", items, ItemCollection::new()),
            Callbacks::new(|_: ItemCollection<Entry>| {}, || {}),
        );
        App::new(Picker::Multi(store))
    }

    fn rendered_lines(app: &App<Entry>) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_list_marks_selected_items() {
        let mut app = multi_app(fruits());
        app.dispatch(Action::MoveCursorDown);
        app.dispatch(Action::ToggleItem);

        let lines = rendered_lines(&app);
        assert!(lines.iter().any(|l| l.contains("✓ Banana")));
        assert!(lines.iter().any(|l| l.contains("  Apple")));
        assert!(!lines.iter().any(|l| l.contains("✓ Apple")));
    }

    #[test]
    fn test_filtered_list_hides_other_items() {
        let mut app = multi_app(fruits());
        app.dispatch(Action::StartSearch);
        app.dispatch(Action::Input('g'));
        app.dispatch(Action::Input('r'));

        let lines = rendered_lines(&app);
        assert!(lines.iter().any(|l| l.contains("Grape")));
        assert!(!lines.iter().any(|l| l.contains("Banana")));
    }

    #[test]
    fn test_empty_hint() {
        let app = multi_app(ItemCollection::new());
        assert_eq!(empty_hint(&app.picker), Some("加载中…"));

        let mut app = multi_app(fruits());
        assert_eq!(empty_hint(&app.picker), None);
        app.dispatch(Action::StartSearch);
        app.dispatch(Action::Input('z'));
        assert_eq!(empty_hint(&app.picker), Some("无匹配项"));
    }

    #[test]
    fn test_help_text_follows_selection() {
        let mut app = multi_app(fruits());
        assert!(help_text(&app).contains("[a] 全选"));
        assert!(help_text(&app).contains("(未选择)"));

        app.dispatch(Action::ToggleAll);
        assert!(help_text(&app).contains("[a] 取消全选"));
        assert!(!help_text(&app).contains("(未选择)"));

        let single = App::new(Picker::Single(Store::new(
            SingleSelection::new("Fruits", fruits(), None),
            Callbacks::new(|_: Option<Entry>| {}, || {}),
        )));
        assert!(help_text(&single).contains("[Enter] 选择"));
    }
}
