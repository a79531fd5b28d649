//! 图算法模块
//!
//! 包含 Prim 和 Kruskal 两种最小生成树算法

mod kruskal;
mod prim;

pub use kruskal::Kruskal;
pub use prim::Prim;
