//! 边表示法
//!
//! 顶点集合 + 扁平的边列表。所有查询都对边列表做线性扫描。

use super::edge::Edge;
use super::render::write_set;
use super::{check_weight, Graph, Label, Weight};
use crate::error::Result;
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use tracing::{debug, trace};

/// 基于边列表的图
#[derive(Debug, Clone)]
pub struct EdgesGraph<L: Label> {
    /// 顶点集合（插入顺序）
    vertices: IndexSet<L>,
    /// 边列表（存储顺序）
    edges: Vec<Edge<L>>,
}

impl<L: Label> Default for EdgesGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> EdgesGraph<L> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: Vec::new(),
        }
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 是否包含顶点
    pub fn contains(&self, vertex: &L) -> bool {
        self.vertices.contains(vertex)
    }

    /// 按存储顺序遍历所有边
    pub fn edges(&self) -> impl Iterator<Item = &Edge<L>> + '_ {
        self.edges.iter()
    }

    fn check_rep(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let mut pairs = IndexSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            debug_assert!(edge.weight() > 0, "stored edge {} has non-positive weight", edge);
            debug_assert!(
                self.vertices.contains(edge.source()),
                "edge {} has unknown source",
                edge
            );
            debug_assert!(
                self.vertices.contains(edge.target()),
                "edge {} has unknown target",
                edge
            );
            debug_assert!(
                pairs.insert((edge.source(), edge.target())),
                "duplicate edge {}",
                edge
            );
        }
    }
}

impl<L: Label> Graph<L> for EdgesGraph<L> {
    fn add(&mut self, vertex: L) -> bool {
        let added = self.vertices.insert(vertex);
        self.check_rep();
        added
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        check_weight(weight)?;

        let mut previous = 0;
        if let Some(pos) = self.edges.iter().position(|e| e.connects(&source, &target)) {
            previous = self.edges.remove(pos).weight();
        }

        if weight > 0 {
            self.edges
                .push(Edge::new(source.clone(), target.clone(), weight)?);
            self.vertices.insert(source.clone());
            self.vertices.insert(target.clone());
        }

        trace!(%source, %target, previous, weight, "set edge");
        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if !self.vertices.shift_remove(vertex) {
            return false;
        }

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(vertex));
        debug!(
            %vertex,
            dropped_edges = before - self.edges.len(),
            "removed vertex"
        );

        self.check_rep();
        true
    }

    fn vertices(&self) -> IndexSet<L> {
        self.vertices.clone()
    }

    fn sources(&self, target: &L) -> IndexMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.target() == target)
            .map(|e| (e.source().clone(), e.weight()))
            .collect()
    }

    fn targets(&self, source: &L) -> IndexMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.source() == source)
            .map(|e| (e.target().clone(), e.weight()))
            .collect()
    }
}

impl<L: Label> fmt::Display for EdgesGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vertices: ")?;
        write_set(f, &self.vertices)?;
        f.write_str("\nEdges:\n")?;
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        Ok(())
    }
}
