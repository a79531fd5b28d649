//! SpanGraph - 不可变加权无向图与最小生成树算法库
//!
//! 面向网络设计、聚类和优化场景的小型算法库，支持：
//! - 不可变（持久化）的图数据结构，所有修改返回新图
//! - Prim 最小生成树算法（边界生长）
//! - Kruskal 最小生成树算法（全局排序 + 并查集）
//! - 结构查询（关联边、邻居、连通性检查）

pub mod algorithm;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::{Kruskal, Prim};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
