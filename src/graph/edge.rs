//! 边定义
//!
//! 无向边：一对顶点加整数权重。相等性是结构性的（有序对 + 权重），
//! 交换端点得到的边是另一个值

use crate::error::{Error, Result};
use crate::graph::vertex::Vertex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// 端点一
    v1: Vertex,
    /// 端点二
    v2: Vertex,
    /// 权重
    weight: i64,
}

impl Edge {
    /// 创建新边
    pub fn new(v1: Vertex, v2: Vertex, weight: i64) -> Self {
        Self { v1, v2, weight }
    }

    /// 获取端点一
    pub fn v1(&self) -> &Vertex {
        &self.v1
    }

    /// 获取端点二
    pub fn v2(&self) -> &Vertex {
        &self.v2
    }

    /// 获取权重
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// 判断给定顶点是否为端点
    pub fn is_endpoint(&self, v: &Vertex) -> bool {
        v == &self.v1 || v == &self.v2
    }

    /// 获取相对于给定端点的另一个端点
    ///
    /// 传入 v1 返回 v2，传入 v2 返回 v1；
    /// 传入其他顶点返回 `Error::VertexNotOnEdge`
    pub fn other_endpoint(&self, v: &Vertex) -> Result<&Vertex> {
        if v == &self.v1 {
            Ok(&self.v2)
        } else if v == &self.v2 {
            Ok(&self.v1)
        } else {
            Err(Error::VertexNotOnEdge(v.id().to_string()))
        }
    }

    /// 确定性排序键: (权重, 端点一标识符, 端点二标识符)
    ///
    /// 两个最小生成树算法都用它决出等权重边的先后，保证结果可复现
    pub(crate) fn sort_key(&self) -> (i64, &str, &str) {
        (self.weight, self.v1.id(), self.v2.id())
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]- {}", self.v1, self.weight, self.v2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_endpoint() {
        let a = Vertex::new("A");
        let b = Vertex::new("B");
        let e = Edge::new(a.clone(), b.clone(), 3);

        assert_eq!(e.other_endpoint(&a).unwrap(), &b);
        assert_eq!(e.other_endpoint(&b).unwrap(), &a);
    }

    #[test]
    fn test_other_endpoint_rejects_foreign_vertex() {
        let e = Edge::new(Vertex::new("A"), Vertex::new("B"), 3);
        let c = Vertex::new("C");

        assert!(matches!(
            e.other_endpoint(&c),
            Err(Error::VertexNotOnEdge(id)) if id == "C"
        ));
    }

    #[test]
    fn test_swapped_edge_is_distinct_value() {
        let ab = Edge::new(Vertex::new("A"), Vertex::new("B"), 3);
        let ba = Edge::new(Vertex::new("B"), Vertex::new("A"), 3);

        assert_ne!(ab, ba);
        assert!(ab.is_endpoint(&Vertex::new("A")));
        assert!(ba.is_endpoint(&Vertex::new("A")));
    }

    #[test]
    fn test_sort_key_breaks_weight_ties() {
        let ab = Edge::new(Vertex::new("A"), Vertex::new("B"), 3);
        let ac = Edge::new(Vertex::new("A"), Vertex::new("C"), 3);
        let light = Edge::new(Vertex::new("Z"), Vertex::new("Z"), 1);

        assert!(light.sort_key() < ab.sort_key());
        assert!(ab.sort_key() < ac.sort_key());
    }

    #[test]
    fn test_edge_serialization() {
        let e = Edge::new(Vertex::new("A"), Vertex::new("B"), 7);

        let json = serde_json::to_string(&e).unwrap();
        let restored: Edge = serde_json::from_str(&json).unwrap();

        assert_eq!(e, restored);
    }
}
