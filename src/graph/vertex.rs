//! 顶点定义
//!
//! 顶点表示法使用的顶点记录：标签 + 出边映射（终点 -> 权重）

use super::render::write_map;
use super::{check_weight, Label, Weight};
use crate::error::Result;
use indexmap::IndexMap;
use std::fmt;

/// 顶点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<L: Label> {
    /// 顶点标签
    label: L,
    /// 出边：终点 -> 权重，权重恒为正
    edges: IndexMap<L, Weight>,
}

impl<L: Label> Vertex<L> {
    /// 创建没有出边的顶点
    pub fn new(label: L) -> Self {
        Self {
            label,
            edges: IndexMap::new(),
        }
    }

    /// 获取顶点标签
    pub fn label(&self) -> &L {
        &self.label
    }

    /// 获取所有出边（只读）
    pub fn edges(&self) -> &IndexMap<L, Weight> {
        &self.edges
    }

    /// 到 `target` 的边权重
    pub fn weight_to(&self, target: &L) -> Option<Weight> {
        self.edges.get(target).copied()
    }

    /// 添加、更新或删除到 `target` 的出边
    ///
    /// 权重为 0 时删除该边，返回是否确实删除了一条边；
    /// 正权重时插入或覆盖，返回 `true`。
    pub fn add_edge(&mut self, target: L, weight: Weight) -> Result<bool> {
        check_weight(weight)?;
        if weight == 0 {
            return Ok(self.remove_edge(&target));
        }
        self.edges.insert(target, weight);
        self.check_rep();
        Ok(true)
    }

    /// 删除到 `target` 的出边，返回是否存在
    pub fn remove_edge(&mut self, target: &L) -> bool {
        // shift_remove 保持其余出边的插入顺序
        self.edges.shift_remove(target).is_some()
    }

    pub(crate) fn check_rep(&self) {
        debug_assert!(
            self.edges.values().all(|&w| w > 0),
            "vertex {} stores a non-positive edge weight",
            self.label
        );
    }
}

impl<L: Label> fmt::Display for Vertex<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} edges: ", self.label)?;
        write_map(f, &self.edges)
    }
}
