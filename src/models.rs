use std::fmt::Debug;
use std::hash::Hash;

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CollectionError;

/// 可选择条目：只要求稳定唯一的 ID 和显示标题
pub trait SelectableItem: Clone + Debug {
    type Id: Clone + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;
    fn title(&self) -> &str;
}

/// 有序且按 ID 唯一的条目集合
#[derive(Debug, Clone)]
pub struct ItemCollection<T: SelectableItem> {
    items: IndexMap<T::Id, T>,
}

impl<T: SelectableItem> ItemCollection<T> {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    /// 从条目列表构建，遇到重复 ID 时报错
    pub fn try_from_items(items: impl IntoIterator<Item = T>) -> Result<Self, CollectionError> {
        let mut collection = Self::new();
        for item in items {
            let id = item.id();
            if !collection.push(item) {
                return Err(CollectionError::DuplicateId(format!("{:?}", id)));
            }
        }
        Ok(collection)
    }

    /// 追加条目；ID 已存在时不做修改并返回 false
    pub fn push(&mut self, item: T) -> bool {
        let id = item.id();
        if self.items.contains_key(&id) {
            return false;
        }
        self.items.insert(id, item);
        true
    }

    /// 按 ID 移除，保持其余条目的顺序
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.items.shift_remove(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.items.contains_key(id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.items.get_index(index).map(|(_, item)| item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &T::Id> {
        self.items.keys()
    }

    /// 保留满足条件的条目，生成新的集合（保持原有顺序）
    pub fn filtered(&self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|(_, item)| predicate(item))
                .map(|(id, item)| (id.clone(), item.clone()))
                .collect(),
        }
    }

    /// 与另一集合是否包含相同的 ID（忽略顺序）
    pub fn same_members(&self, other: &Self) -> bool {
        self.len() == other.len() && self.ids().all(|id| other.contains(id))
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items.into_values().collect()
    }
}

impl<T: SelectableItem> Default for ItemCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 后出现的重复 ID 会被忽略
impl<T: SelectableItem> FromIterator<T> for ItemCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        for item in iter {
            collection.push(item);
        }
        collection
    }
}

impl<'a, T: SelectableItem> IntoIterator for &'a ItemCollection<T> {
    type Item = &'a T;
    type IntoIter = indexmap::map::Values<'a, T::Id, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

// ============ 条目文件 ============

/// 列表条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default = "new_entry_id")]
    pub id: String,
    pub title: String,
}

fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

impl Entry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_entry_id(),
            title: title.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl SelectableItem for Entry {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// TOML 条目文件结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemListData {
    #[serde(default)]
    pub meta: ListMeta,
    /// 预选条目的 ID
    #[serde(default)]
    pub selected: Vec<String>,
    #[serde(default)]
    pub items: Vec<Entry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMeta {
    pub version: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for ListMeta {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            title: None,
        }
    }
}

/// 选择模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PickerMode {
    #[default]
    Single,
    Multi,
}

/// 发布结果的记录文件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub picked_at: DateTime<Local>,
    pub title: String,
    pub mode: PickerMode,
    #[serde(default)]
    pub items: Vec<Entry>,
}

impl SelectionRecord {
    pub fn new(title: String, mode: PickerMode, items: Vec<Entry>) -> Self {
        Self {
            picked_at: Local::now(),
            title,
            mode,
            items,
        }
    }
}
