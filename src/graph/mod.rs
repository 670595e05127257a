//! 图核心模块
//!
//! 定义带权有向图的统一接口 [`Graph`]，以及两种可互换的内部表示：
//! - [`EdgesGraph`]：顶点集合 + 扁平的边列表
//! - [`VerticesGraph`]：顶点对象序列，每个顶点持有自己的出边映射
//!
//! 两种表示对相同的操作序列给出相同的 `vertices`、`sources`、`targets`
//! 以及 `set` 返回值，只有调试输出格式不同。

mod edge;
mod edges_graph;
mod kind;
mod render;
mod vertex;
mod vertices_graph;


pub use edge::Edge;
pub use edges_graph::EdgesGraph;
pub use kind::GraphKind;
pub use vertex::Vertex;
pub use vertices_graph::VerticesGraph;

use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::hash::Hash;

/// 边权重。存储中的权重恒为正数，0 表示 "没有边"
pub type Weight = i32;

/// 顶点标签
///
/// 任何可克隆、可比较、可哈希并且可显示的类型都可以作为标签。
pub trait Label: Clone + Eq + Hash + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Display> Label for T {}

/// 可变的带权有向图
///
/// 顶点由标签唯一标识，每个有序顶点对之间至多一条边。
/// 查询操作返回独立的快照，调用方无法通过返回值修改图的内部状态。
pub trait Graph<L: Label>: fmt::Display {
    /// 添加顶点
    ///
    /// 顶点不存在时插入并返回 `true`；已存在时不做任何修改并返回 `false`。
    fn add(&mut self, vertex: L) -> bool;

    /// 设置 `source -> target` 边的权重
    ///
    /// - `weight > 0`：插入或覆盖该边，并自动添加缺失的两个端点
    /// - `weight == 0`：删除该边（如果存在），不会创建顶点
    /// - `weight < 0`：返回 [`Error::NegativeWeight`]，图保持不变
    ///
    /// 返回调用前该边的权重，不存在时为 0。
    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight>;

    /// 删除顶点以及所有以它为起点或终点的边
    ///
    /// 返回调用前该顶点是否存在。
    fn remove(&mut self, vertex: &L) -> bool;

    /// 所有顶点标签的快照
    fn vertices(&self) -> IndexSet<L>;

    /// 指向 `target` 的所有边：起点 -> 权重
    fn sources(&self, target: &L) -> IndexMap<L, Weight>;

    /// 从 `source` 出发的所有边：终点 -> 权重
    fn targets(&self, source: &L) -> IndexMap<L, Weight>;
}

/// 校验边权重，负数返回错误
pub(crate) fn check_weight(weight: Weight) -> Result<()> {
    if weight < 0 {
        return Err(Error::NegativeWeight(weight));
    }
    Ok(())
}
