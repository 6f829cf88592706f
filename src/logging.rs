use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{
    EnvFilter, filter::Directive, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::error::PickerError;

/// 初始化日志，输出到文件（终端由界面占用）
///
/// `quiet` 为 true 时只记录 error 级别。
pub fn init_logging(log_path: &Path, level: &str, quiet: bool) -> Result<(), PickerError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let level = if quiet { "error" } else { level };
    let filter = match format!("listpick={}", level).parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(Mutex::new(file))
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();

    Ok(())
}
