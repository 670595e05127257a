//! labelgraph - 带权有向图
//!
//! 以任意标签类型为顶点的内存图结构，支持：
//! - 顶点的添加与级联删除
//! - 以权重设置、覆盖、删除边（权重 0 表示删除）
//! - 入边/出边查询
//! - 两种可互换的内部表示（边列表 / 顶点对象）
//!
//! ```
//! use labelgraph::{EdgesGraph, Graph};
//!
//! let mut graph = EdgesGraph::new();
//! graph.add("X");
//! assert_eq!(graph.set("X", "Y", 8).unwrap(), 0);
//! assert_eq!(graph.set("X", "Y", 15).unwrap(), 8);
//! assert_eq!(graph.targets(&"X").get(&"Y"), Some(&15));
//! ```

pub mod error;
pub mod graph;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Edge, EdgesGraph, Graph, GraphKind, Label, Vertex, VerticesGraph, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
