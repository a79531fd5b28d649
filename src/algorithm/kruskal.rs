//! Kruskal 最小生成树算法
//!
//! 按权重全局排序所有边，用并查集拒绝会成环的边。
//! 对不连通的图自然产生最小生成森林

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

/// 并查集（路径压缩 + 按秩合并）
///
/// 相对逐顶点重标号的朴素做法是纯粹的性能优化，
/// 边的接受/拒绝决策完全一致
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            // 路径压缩
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// 合并两个集合；若本来就同属一个集合则返回 false
    fn union(&mut self, x: usize, y: usize) -> bool {
        let px = self.find(x);
        let py = self.find(y);
        if px == py {
            return false;
        }

        // 按秩合并
        if self.rank[px] < self.rank[py] {
            self.parent[px] = py;
        } else if self.rank[px] > self.rank[py] {
            self.parent[py] = px;
        } else {
            self.parent[py] = px;
            self.rank[px] += 1;
        }
        true
    }
}

/// 查找顶点的并查集标号
///
/// 构造保证每个顶点都有标号；查不到说明图违反了
/// "边的端点都在顶点集中"的不变量，属于编程缺陷而非
/// 可恢复的运行时错误
fn label_of(labels: &IndexMap<String, usize>, id: &str) -> Result<usize> {
    labels
        .get(id)
        .copied()
        .ok_or_else(|| Error::InternalError(format!("顶点 {} 没有并查集标号", id)))
}

/// Kruskal 最小生成树算法
pub struct Kruskal<'a> {
    graph: &'a Graph,
}

impl<'a> Kruskal<'a> {
    /// 创建算法实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 计算最小生成树
    ///
    /// 无连通性前置条件：不连通的图返回最小生成森林，
    /// 结果图保留原图的全部顶点。等权重边按
    /// (权重, 端点标识符) 字典序处理，保证结果可复现
    pub fn mst(&self) -> Result<Graph> {
        let vertices = self.graph.vertices().clone();

        // 每个顶点分配一个并查集标号
        let labels: IndexMap<String, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id().to_string(), i))
            .collect();

        let mut edges: Vec<Edge> = self.graph.edges().iter().cloned().collect();
        edges.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        let mut uf = UnionFind::new(vertices.len());
        let mut result: IndexSet<Edge> = IndexSet::new();

        for edge in edges {
            let i = label_of(&labels, edge.v1().id())?;
            let j = label_of(&labels, edge.v2().id())?;

            // 同属一个连通分量的边会成环，跳过
            if uf.union(i, j) {
                result.insert(edge);
            }
        }

        debug!(edges = result.len(), "kruskal: 完成");
        Ok(Graph::new(vertices, result))
    }
}
