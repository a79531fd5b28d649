//! 顶点定义
//!
//! 顶点由不透明的字符串标识符唯一确定，创建后不可变

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点
///
/// 相等性和哈希仅由标识符决定。`Ord` 按标识符字典序，
/// 供算法做确定性排序使用
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点标识符
    id: String,
}

impl Vertex {
    /// 创建新顶点
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// 获取顶点标识符
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
