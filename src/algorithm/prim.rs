//! Prim 最小生成树算法
//!
//! 从种子顶点出发贪心生长边界，每次选择连接已标记顶点和
//! 未标记顶点的最小权重边

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex};
use indexmap::IndexSet;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use tracing::debug;

/// 边界优先级: (权重, 端点一标识符, 端点二标识符)
///
/// 取 `Reverse` 使优先队列按最小键出队；等权重边按端点
/// 字典序决出，保证结果可复现
type FrontierKey = Reverse<(i64, String, String)>;

fn frontier_key(edge: &Edge) -> FrontierKey {
    Reverse((
        edge.weight(),
        edge.v1().id().to_string(),
        edge.v2().id().to_string(),
    ))
}

/// Prim 最小生成树算法
pub struct Prim<'a> {
    graph: &'a Graph,
}

impl<'a> Prim<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算最小生成树
    ///
    /// 前置条件：图必须通过 `is_connex` 检查（基于度数的弱语义），
    /// 否则返回 `Error::NotConnex`。若弱检查放行了实际不连通的图，
    /// 边界会在覆盖所有顶点前耗尽，此时快速失败返回
    /// `Error::AlgorithmError` 而不是死循环
    pub fn mst(&self) -> Result<Graph> {
        if let Some(isolated) = self.graph.isolated_vertex() {
            return Err(Error::NotConnex(isolated.id().to_string()));
        }

        // 种子取标识符字典序最小的顶点，保证结果确定
        let seed = match self.graph.vertices().iter().min() {
            Some(v) => v.clone(),
            // 空图的生成树是空图
            None => return Ok(Graph::empty()),
        };

        debug!(seed = seed.id(), "prim: 开始生长边界");

        let mut marked: IndexSet<Vertex> = IndexSet::new();
        marked.insert(seed.clone());

        // 边界：连接已标记顶点和未标记顶点的候选边
        let mut frontier: PriorityQueue<Edge, FrontierKey> = PriorityQueue::new();
        for edge in self.graph.get_vertex_edges(&seed) {
            let key = frontier_key(&edge);
            frontier.push(edge, key);
        }

        let mut result: IndexSet<Edge> = IndexSet::new();

        while marked.len() < self.graph.vertex_count() {
            let (edge, _) = frontier.pop().ok_or_else(|| {
                Error::AlgorithmError(format!(
                    "边界在覆盖所有顶点前耗尽 (已标记 {}/{})，图实际不连通",
                    marked.len(),
                    self.graph.vertex_count()
                ))
            })?;

            // 两端都已标记的边是过期候选，出队时跳过
            // （等价于在标记新顶点时把它们从边界中删除）
            let v1_marked = marked.contains(edge.v1());
            let v2_marked = marked.contains(edge.v2());
            if v1_marked && v2_marked {
                continue;
            }

            // 新顶点是未标记的那个端点
            let fresh = if v1_marked {
                edge.v2().clone()
            } else {
                edge.v1().clone()
            };
            marked.insert(fresh.clone());

            // 新顶点的关联边中，另一端未标记的进入边界
            for candidate in self.graph.get_vertex_edges(&fresh) {
                let other = candidate.other_endpoint(&fresh)?;
                if !marked.contains(other) {
                    let key = frontier_key(&candidate);
                    frontier.push(candidate, key);
                }
            }

            result.insert(edge);
        }

        debug!(edges = result.len(), "prim: 完成");
        Ok(Graph::new(marked, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_graph(weights: &[(&str, &str, i64)]) -> Graph {
        let mut vertices: IndexSet<Vertex> = IndexSet::new();
        let mut edges: IndexSet<Edge> = IndexSet::new();
        for &(s, t, w) in weights {
            vertices.insert(Vertex::new(s));
            vertices.insert(Vertex::new(t));
            edges.insert(Edge::new(Vertex::new(s), Vertex::new(t), w));
        }
        Graph::new(vertices, edges)
    }

    #[test]
    fn test_prim_rejects_isolated_vertex() {
        let g = build_graph(&[("A", "B", 1)]).add_vertex(Vertex::new("C"));

        let err = Prim::new(&g).mst().unwrap_err();
        assert!(matches!(err, Error::NotConnex(id) if id == "C"));
    }

    #[test]
    fn test_prim_fails_fast_on_exhausted_frontier() {
        // 两个分量通过了弱连通性检查，边界必然提前耗尽
        let g = build_graph(&[("A", "B", 1), ("C", "D", 2)]);
        assert!(g.is_connex());

        let err = Prim::new(&g).mst().unwrap_err();
        assert!(matches!(err, Error::AlgorithmError(_)));
    }

    #[test]
    fn test_prim_empty_graph() {
        let mst = Prim::new(&Graph::empty()).mst().unwrap();
        assert_eq!(mst.vertex_count(), 0);
        assert_eq!(mst.edge_count(), 0);
    }

    #[test]
    fn test_prim_spanning_tree_size() {
        let g = build_graph(&[
            ("A", "B", 4),
            ("B", "C", 8),
            ("C", "D", 7),
            ("D", "E", 9),
            ("A", "E", 20),
            ("B", "E", 11),
            ("C", "E", 1),
        ]);

        let mst = Prim::new(&g).mst().unwrap();
        assert_eq!(mst.vertex_count(), 5);
        assert_eq!(mst.edge_count(), 4);
        assert_eq!(mst.total_weight(), 4 + 8 + 7 + 1);
    }

    #[test]
    fn test_prim_deterministic_under_weight_ties() {
        // 所有边等权重时按 (权重, 端点标识符) 字典序选择
        let g = build_graph(&[("A", "B", 1), ("A", "C", 1), ("B", "C", 1)]);

        let first = Prim::new(&g).mst().unwrap();
        let second = Prim::new(&g).mst().unwrap();

        assert_eq!(first, second);
        assert!(first.edges().contains(&Edge::new(
            Vertex::new("A"),
            Vertex::new("B"),
            1
        )));
        assert!(first.edges().contains(&Edge::new(
            Vertex::new("A"),
            Vertex::new("C"),
            1
        )));
    }
}
