//! 单选 / 多选列表选择器
//!
//! 选择容器 (selection) 与终端界面 (ui) 分离，宿主通过回调接收结果。

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod selection;
pub mod storage;
pub mod ui;
