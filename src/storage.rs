use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::PickerError;
use crate::models::{Entry, ItemCollection, ItemListData, SelectionRecord};

/// 获取数据目录路径 (~/.local/share/listpick/)
pub fn data_dir() -> Result<PathBuf, PickerError> {
    let data_dir = dirs::data_dir()
        .ok_or(PickerError::MissingDirectory { kind: "data" })?
        .join("listpick");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 从条目文件读出的内容
#[derive(Debug, Clone, Default)]
pub struct LoadedItems {
    pub title: Option<String>,
    pub items: ItemCollection<Entry>,
    pub selected: ItemCollection<Entry>,
}

/// 从TOML文件加载条目
pub fn load_items(path: &Path) -> Result<LoadedItems, PickerError> {
    if !path.exists() {
        info!(path = %path.display(), "items file not found, starting empty");
        return Ok(LoadedItems::default());
    }

    let content = fs::read_to_string(path)?;
    let data: ItemListData =
        toml::from_str(&content).map_err(|e| PickerError::parse(path, e))?;

    let items = ItemCollection::try_from_items(data.items).map_err(|source| {
        PickerError::DuplicateItem {
            path: path.to_path_buf(),
            source,
        }
    })?;

    // 预选 ID 必须存在于条目中
    let mut selected = ItemCollection::new();
    for id in &data.selected {
        match items.get(id) {
            Some(entry) => {
                selected.push(entry.clone());
            }
            None => warn!(%id, "preselected id not found in items"),
        }
    }

    info!(
        path = %path.display(),
        items = items.len(),
        selected = selected.len(),
        "loaded items"
    );

    Ok(LoadedItems {
        title: data.meta.title,
        items,
        selected,
    })
}

/// 保存选择结果到TOML文件
pub fn save_selection(record: &SelectionRecord, path: &Path) -> Result<(), PickerError> {
    let content = toml::to_string_pretty(record)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;

    info!(path = %path.display(), count = record.items.len(), "saved selection");
    Ok(())
}
