use std::io;
use std::path::PathBuf;

/// 条目集合的构建错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    #[error("Duplicate item id: {0}")]
    DuplicateId(String),
}

/// 宿主程序错误（配置、文件、终端）
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to encode TOML: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("Duplicate item in '{path}': {source}")]
    DuplicateItem {
        path: PathBuf,
        #[source]
        source: CollectionError,
    },

    #[error("Could not determine the user {kind} directory")]
    MissingDirectory { kind: &'static str },
}

impl PickerError {
    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        PickerError::Parse {
            path: path.into(),
            source,
        }
    }
}
