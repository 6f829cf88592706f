use std::io;
use std::path::PathBuf;
use std::sync::mpsc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{info, warn};

use listpick::config::{Overrides, PickerConfig};
use listpick::error::PickerError;
use listpick::logging::init_logging;
use listpick::models::{Entry, ItemCollection, PickerMode, SelectionRecord};
use listpick::selection::{Callbacks, MultiSelection, SingleSelection, Store};
use listpick::storage::{data_dir, load_items, save_selection};
use listpick::ui::{self, App, Picker, render};

#[derive(Debug, Parser)]
#[command(name = "listpick", version, about = "Pick one or more items from a list")]
struct Cli {
    /// 多选模式
    #[arg(long)]
    multi: bool,

    /// 标题
    #[arg(long)]
    title: Option<String>,

    /// 条目文件 (默认 ~/.local/share/listpick/items.toml)
    #[arg(long)]
    items: Option<PathBuf>,

    /// 结果文件 (默认 ~/.local/share/listpick/selection.toml)
    #[arg(long)]
    output: Option<PathBuf>,

    /// 配置文件 (默认 ~/.config/listpick/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 只记录错误日志
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<(), PickerError> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => PickerConfig::default_path()?,
    };
    let config = PickerConfig::load(&config_path)?.apply(Overrides {
        title: cli.title,
        multi: cli.multi,
        items_path: cli.items,
        output_path: cli.output,
    });

    let data_dir = data_dir()?;
    init_logging(&data_dir.join("listpick.log"), &config.log_level, cli.quiet)?;

    let items_path = config
        .items_path
        .clone()
        .unwrap_or_else(|| data_dir.join("items.toml"));
    let output_path = config
        .output_path
        .clone()
        .unwrap_or_else(|| data_dir.join("selection.toml"));

    // 加载条目
    let loaded = load_items(&items_path)?;
    let title = config
        .title
        .clone()
        .or(loaded.title)
        .unwrap_or_else(|| "选择".to_string());

    // 发布的结果通过 channel 交回
    let (tx, rx) = mpsc::channel::<Vec<Entry>>();
    let picker = match config.mode {
        PickerMode::Single => {
            let preselected = loaded.selected.iter().next().cloned();
            Picker::Single(Store::new(
                SingleSelection::new(title.clone(), loaded.items, preselected),
                Callbacks::new(
                    move |item: Option<Entry>| {
                        if tx.send(item.into_iter().collect()).is_err() {
                            warn!("selection receiver dropped");
                        }
                    },
                    || info!("picker dismissed"),
                ),
            ))
        }
        PickerMode::Multi => Picker::Multi(Store::new(
            MultiSelection::new(title.clone(), loaded.items, loaded.selected),
            Callbacks::new(
                move |items: ItemCollection<Entry>| {
                    if tx.send(items.into_vec()).is_err() {
                        warn!("selection receiver dropped");
                    }
                },
                || info!("picker dismissed"),
            ),
        )),
    };

    // 创建应用状态
    let mut app = App::new(picker);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;

    // 保存结果
    match rx.try_recv() {
        Ok(items) => {
            if items.is_empty() {
                println!("未选择任何项");
            }
            for item in &items {
                println!("{}", item.title);
            }
            let record = SelectionRecord::new(title, config.mode, items);
            save_selection(&record, &output_path)?;
            println!("结果已保存到 {}", output_path.display());
        }
        Err(_) => {
            info!("picker closed without publishing");
            println!("已取消");
        }
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<Entry>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press
                && ui::handle_key_event(app, key.code)
            {
                break;
            }
        }
    }
    Ok(())
}
