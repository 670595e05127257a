//! 顶点表示法
//!
//! 顶点对象序列，每个顶点持有自己的出边映射。

use super::vertex::Vertex;
use super::{check_weight, Graph, Label, Weight};
use crate::error::Result;
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use tracing::{debug, trace};

/// 基于顶点对象的图
#[derive(Debug, Clone)]
pub struct VerticesGraph<L: Label> {
    /// 顶点序列（插入顺序）
    vertices: Vec<Vertex<L>>,
}

impl<L: Label> Default for VerticesGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> VerticesGraph<L> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.edges().len()).sum()
    }

    /// 是否包含顶点
    pub fn contains(&self, label: &L) -> bool {
        self.position(label).is_some()
    }

    /// 按标签查找顶点
    pub fn vertex(&self, label: &L) -> Option<&Vertex<L>> {
        self.vertices.iter().find(|v| v.label() == label)
    }

    fn position(&self, label: &L) -> Option<usize> {
        self.vertices.iter().position(|v| v.label() == label)
    }

    /// 查找顶点下标，不存在时在末尾创建
    fn position_or_insert(&mut self, label: L) -> usize {
        match self.position(&label) {
            Some(pos) => pos,
            None => {
                self.vertices.push(Vertex::new(label));
                self.vertices.len() - 1
            }
        }
    }

    fn check_rep(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let mut labels = IndexSet::with_capacity(self.vertices.len());
        for v in &self.vertices {
            debug_assert!(labels.insert(v.label()), "duplicate vertex {}", v.label());
            v.check_rep();
        }
        for v in &self.vertices {
            for target in v.edges().keys() {
                debug_assert!(
                    labels.contains(&target),
                    "edge {} -> {} has unknown target",
                    v.label(),
                    target
                );
            }
        }
    }
}

impl<L: Label> Graph<L> for VerticesGraph<L> {
    fn add(&mut self, vertex: L) -> bool {
        if self.contains(&vertex) {
            return false;
        }
        self.vertices.push(Vertex::new(vertex));
        self.check_rep();
        true
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        check_weight(weight)?;

        let previous = if weight == 0 {
            // 删除边不创建顶点
            match self.position(&source) {
                Some(pos) => {
                    let v = &mut self.vertices[pos];
                    let previous = v.weight_to(&target).unwrap_or(0);
                    v.remove_edge(&target);
                    previous
                }
                None => 0,
            }
        } else {
            let pos = self.position_or_insert(source.clone());
            let v = &mut self.vertices[pos];
            let previous = v.weight_to(&target).unwrap_or(0);
            v.add_edge(target.clone(), weight)?;
            self.position_or_insert(target.clone());
            previous
        };

        trace!(%source, %target, previous, weight, "set edge");
        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        let Some(pos) = self.position(vertex) else {
            return false;
        };
        let removed = self.vertices.remove(pos);

        let mut dropped_edges = removed.edges().len();
        for v in &mut self.vertices {
            if v.remove_edge(vertex) {
                dropped_edges += 1;
            }
        }
        debug!(%vertex, dropped_edges, "removed vertex");

        self.check_rep();
        true
    }

    fn vertices(&self) -> IndexSet<L> {
        self.vertices.iter().map(|v| v.label().clone()).collect()
    }

    fn sources(&self, target: &L) -> IndexMap<L, Weight> {
        self.vertices
            .iter()
            .filter_map(|v| v.weight_to(target).map(|w| (v.label().clone(), w)))
            .collect()
    }

    fn targets(&self, source: &L) -> IndexMap<L, Weight> {
        self.vertex(source)
            .map(|v| v.edges().clone())
            .unwrap_or_default()
    }
}

impl<L: Label> fmt::Display for VerticesGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.vertices {
            writeln!(f, "{}", v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> VerticesGraph<&'static str> {
        VerticesGraph::new()
    }

    #[test]
    fn test_add_unique_vertex() {
        let mut g = graph();

        assert!(g.add("X"));
        assert!(!g.add("X"));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_set_and_update_edge() {
        let mut g = graph();
        g.add("X");
        g.add("Y");

        assert_eq!(g.set("X", "Y", 2), Ok(0));
        assert_eq!(g.set("X", "Y", 3), Ok(2));
        assert_eq!(g.set("X", "Y", 0), Ok(3));
        assert!(g.targets(&"X").is_empty());
    }

    #[test]
    fn test_set_creates_target_vertex() {
        let mut g = graph();

        g.set("P", "Q", 1).unwrap();
        assert!(g.contains(&"Q"));
        assert!(g.vertex(&"Q").unwrap().edges().is_empty());
        assert_eq!(g.to_string(), "P edges: {Q=1}\nQ edges: {}\n");
    }

    #[test]
    fn test_vertex_removal_cascades() {
        let mut g = graph();
        g.add("P");
        g.add("Q");
        g.set("P", "Q", 5).unwrap();
        g.set("Q", "P", 4).unwrap();

        assert!(g.remove(&"Q"));
        assert!(!g.remove(&"R"));
        assert!(g.targets(&"P").is_empty());
        assert!(g.sources(&"P").is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_edge_count() {
        let mut g = graph();
        g.set("A", "B", 1).unwrap();
        g.set("A", "C", 1).unwrap();
        g.set("C", "A", 1).unwrap();

        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.vertex_count(), 3);
    }

    #[test]
    fn test_graph_display() {
        let mut g = graph();
        g.add("J");
        g.add("K");
        g.set("J", "K", 3).unwrap();

        assert_eq!(g.to_string(), "J edges: {K=3}\nK edges: {}\n");
    }

    #[test]
    fn test_empty_graph_display() {
        assert_eq!(graph().to_string(), "");
    }
}
