use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;

/// 商品文档的存储介质
///
/// 只负责整份文档的读写，序列化与种子数据由 [`crate::ProductStore`] 处理。
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// 文档是否已存在
    async fn exists(&self) -> Result<bool, StoreError>;

    /// 读取整份文档
    async fn read(&self) -> Result<String, StoreError>;

    /// 覆盖写入整份文档，必要时创建所在目录
    async fn write(&self, contents: &str) -> Result<(), StoreError>;

    /// 用于日志的位置描述
    fn location(&self) -> String;
}

/// 磁盘上的单个 JSON 文件
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self::new(data_dir.as_ref().join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn exists(&self) -> Result<bool, StoreError> {
        tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))
    }

    async fn read(&self) -> Result<String, StoreError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))
    }

    async fn write(&self, contents: &str) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::io(dir, e))?;
        }

        // 先写临时文件再重命名，避免写到一半时留下损坏的文档
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// 内存中的文档，供测试使用
#[derive(Debug, Default)]
pub struct MemoryBackend {
    document: RwLock<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            document: RwLock::new(Some(contents.into())),
        }
    }

    pub async fn contents(&self) -> Option<String> {
        self.document.read().await.clone()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn exists(&self) -> Result<bool, StoreError> {
        Ok(self.document.read().await.is_some())
    }

    async fn read(&self) -> Result<String, StoreError> {
        self.document.read().await.clone().ok_or_else(|| {
            StoreError::io(
                "memory",
                std::io::Error::new(std::io::ErrorKind::NotFound, "document not initialized"),
            )
        })
    }

    async fn write(&self, contents: &str) -> Result<(), StoreError> {
        *self.document.write().await = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
