//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效的边: 端点 {0} 不在图的顶点集中")]
    InvalidEdge(String),

    #[error("顶点 {0} 不是该边的端点")]
    VertexNotOnEdge(String),

    #[error("图不满足连通性前置条件: 顶点 {0} 没有关联边")]
    NotConnex(String),

    #[error("算法错误: {0}")]
    AlgorithmError(String),

    #[error("内部错误: {0}")]
    InternalError(String),
}
