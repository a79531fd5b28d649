//! 图数据结构
//!
//! 不可变的加权无向图：每次修改都返回新的图值，原图保持不变

use crate::error::{Error, Result};
use crate::graph::edge::Edge;
use crate::graph::vertex::Vertex;
use indexmap::{IndexMap, IndexSet};
use std::fmt;

/// 不可变图
///
/// 由顶点集和边集组成，构造时建立两个派生索引：
/// 标识符到顶点的查找表和每个顶点的邻接表
#[derive(Debug, Clone)]
pub struct Graph {
    /// 顶点集
    vertices: IndexSet<Vertex>,
    /// 边集
    edges: IndexSet<Edge>,
    /// 标识符到顶点的索引
    id_index: IndexMap<String, Vertex>,
    /// 顶点标识符到关联边的邻接索引
    adjacency: IndexMap<String, Vec<Edge>>,
}

impl Graph {
    /// 创建新图
    ///
    /// 不校验边的端点是否属于顶点集（`add_edge` 负责校验）；
    /// 直接构造时由调用方保证该不变量
    pub fn new(vertices: IndexSet<Vertex>, edges: IndexSet<Edge>) -> Self {
        let id_index: IndexMap<String, Vertex> = vertices
            .iter()
            .map(|v| (v.id().to_string(), v.clone()))
            .collect();

        let mut adjacency: IndexMap<String, Vec<Edge>> = vertices
            .iter()
            .map(|v| (v.id().to_string(), Vec::new()))
            .collect();
        for edge in &edges {
            if let Some(incident) = adjacency.get_mut(edge.v1().id()) {
                incident.push(edge.clone());
            }
            // 自环只登记一次
            if edge.v2() != edge.v1() {
                if let Some(incident) = adjacency.get_mut(edge.v2().id()) {
                    incident.push(edge.clone());
                }
            }
        }

        Self {
            vertices,
            edges,
            id_index,
            adjacency,
        }
    }

    /// 创建空图
    pub fn empty() -> Self {
        Self::new(IndexSet::new(), IndexSet::new())
    }

    // ==================== 结构查询 ====================

    /// 获取顶点集
    pub fn vertices(&self) -> &IndexSet<Vertex> {
        &self.vertices
    }

    /// 获取边集
    pub fn edges(&self) -> &IndexSet<Edge> {
        &self.edges
    }

    /// 通过标识符获取顶点
    pub fn get_vertex(&self, id: &str) -> Option<&Vertex> {
        self.id_index.get(id)
    }

    /// 获取顶点的所有关联边
    pub fn get_vertex_edges(&self, v: &Vertex) -> Vec<Edge> {
        self.adjacency.get(v.id()).cloned().unwrap_or_default()
    }

    /// 获取顶点的邻居（关联边的另一端点）
    pub fn get_vertex_neighbours(&self, v: &Vertex) -> IndexSet<Vertex> {
        self.adjacency
            .get(v.id())
            .into_iter()
            .flatten()
            .filter_map(|e| e.other_endpoint(v).ok())
            .cloned()
            .collect()
    }

    /// 查找第一个孤立顶点（没有关联边的顶点）
    pub fn isolated_vertex(&self) -> Option<&Vertex> {
        self.vertices.iter().find(|v| {
            self.adjacency
                .get(v.id())
                .map(|incident| incident.is_empty())
                .unwrap_or(true)
        })
    }

    /// 连通性检查（基于度数的弱语义）
    ///
    /// 当且仅当没有顶点的度数为零时返回 true。注意这不是
    /// 可达性意义上的连通：两个互不相连的三角形也会被判为
    /// "连通"。下游调用方依赖此语义，不要改成 BFS/DFS 可达性
    pub fn is_connex(&self) -> bool {
        self.isolated_vertex().is_none()
    }

    // ==================== 持久化修改 ====================

    /// 添加顶点，返回新图
    ///
    /// 原图不受影响；重复添加已有顶点得到与原图相等的图
    pub fn add_vertex(&self, v: Vertex) -> Graph {
        let mut vertices = self.vertices.clone();
        vertices.insert(v);
        Graph::new(vertices, self.edges.clone())
    }

    /// 添加边，返回新图
    ///
    /// 两个端点都必须已在顶点集中，否则返回 `Error::InvalidEdge`
    /// 且原图不受影响。不做重复边或环路检查
    pub fn add_edge(&self, e: Edge) -> Result<Graph> {
        for v in [e.v1(), e.v2()] {
            if !self.vertices.contains(v) {
                return Err(Error::InvalidEdge(v.id().to_string()));
            }
        }

        let mut edges = self.edges.clone();
        edges.insert(e);
        Ok(Graph::new(self.vertices.clone(), edges))
    }

    /// 在两个顶点之间添加边（便捷方法）
    pub fn add_edge_between(&self, v1: &Vertex, v2: &Vertex, weight: i64) -> Result<Graph> {
        self.add_edge(Edge::new(v1.clone(), v2.clone(), weight))
    }

    // ==================== 统计 ====================

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 获取所有边的总权重
    pub fn total_weight(&self) -> i64 {
        self.edges.iter().map(|e| e.weight()).sum()
    }

    // ==================== 最小生成树 ====================

    /// 计算 Prim 最小生成树
    ///
    /// 前置条件：图必须通过 `is_connex` 检查
    pub fn get_prim_mst(&self) -> Result<Graph> {
        crate::algorithm::Prim::new(self).mst()
    }

    /// 计算 Kruskal 最小生成树
    ///
    /// 不连通的图返回最小生成森林
    pub fn get_kruskal_mst(&self) -> Result<Graph> {
        crate::algorithm::Kruskal::new(self).mst()
    }
}

impl PartialEq for Graph {
    /// 观察等价：只比较顶点集和边集，与插入顺序和派生索引无关
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.edges == other.edges
    }
}

impl Eq for Graph {}

impl Default for Graph {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Graph {
    /// 诊断用文本形式：每行一条边，顺序不保证稳定
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.edges.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
