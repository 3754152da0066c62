//! 商品存储基础设施
//!
//! 持久层就是一个 JSON 数组文件：每次读取整文件反序列化，
//! 每次写入整数组覆盖。存储通过 [`GoodsStore`] 注入，
//! 测试时用 [`MemoryStore`] 替代真实文件。

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::app::goods::model::Goods;

/// 存储接口：整读整写商品数组
pub trait GoodsStore: Send + Sync {
    fn read_all(&self) -> io::Result<Vec<Goods>>;
    fn write_all(&self, goods: &[Goods]) -> io::Result<()>;
}

/// 基于单个 JSON 文件的存储实现
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// 打开存储文件，文件不存在时先写入空数组 `[]`
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if !path.exists() {
            fs::write(&path, "[]")?;
        }
        Ok(Self { path })
    }
}

impl GoodsStore for FileStore {
    fn read_all(&self) -> io::Result<Vec<Goods>> {
        let text = fs::read_to_string(&self.path)?;
        // 空文件按空数组处理
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn write_all(&self, goods: &[Goods]) -> io::Result<()> {
        let text = serde_json::to_string(goods)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, text)
    }
}

/// 内存存储，测试时替代真实文件 I/O
#[derive(Default)]
pub struct MemoryStore {
    goods: Mutex<Vec<Goods>>,
}

impl GoodsStore for MemoryStore {
    fn read_all(&self) -> io::Result<Vec<Goods>> {
        Ok(self.goods.lock().unwrap().clone())
    }

    fn write_all(&self, goods: &[Goods]) -> io::Result<()> {
        *self.goods.lock().unwrap() = goods.to_vec();
        Ok(())
    }
}
