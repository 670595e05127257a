//! 边定义
//!
//! 边表示法使用的不可变边记录：起点、终点、权重

use super::{check_weight, Label, Weight};
use crate::error::Result;
use std::fmt;

/// 有向带权边
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<L> {
    /// 起点
    source: L,
    /// 终点
    target: L,
    /// 权重
    weight: Weight,
}

impl<L: Label> Edge<L> {
    /// 创建新边，负权重返回错误
    pub fn new(source: L, target: L, weight: Weight) -> Result<Self> {
        check_weight(weight)?;
        Ok(Self {
            source,
            target,
            weight,
        })
    }

    /// 获取起点
    pub fn source(&self) -> &L {
        &self.source
    }

    /// 获取终点
    pub fn target(&self) -> &L {
        &self.target
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 是否为 `source -> target` 这条边
    pub fn connects(&self, source: &L, target: &L) -> bool {
        &self.source == source && &self.target == target
    }

    /// 是否以 `vertex` 为起点或终点
    pub fn touches(&self, vertex: &L) -> bool {
        &self.source == vertex || &self.target == vertex
    }
}

impl<L: fmt::Display> fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_edge_attributes() {
        let e = Edge::new("X", "Y", 6).unwrap();

        assert_eq!(e.source(), &"X");
        assert_eq!(e.target(), &"Y");
        assert_eq!(e.weight(), 6);
        assert!(e.connects(&"X", &"Y"));
        assert!(!e.connects(&"Y", &"X"));
    }

    #[test]
    fn test_edge_touches() {
        let e = Edge::new("X", "Y", 1).unwrap();

        assert!(e.touches(&"X"));
        assert!(e.touches(&"Y"));
        assert!(!e.touches(&"Z"));
    }

    #[test]
    fn test_edge_display() {
        let e = Edge::new("X", "Y", 6).unwrap();
        assert_eq!(e.to_string(), "X -> Y (6)");

        let self_loop = Edge::new(7u32, 7u32, 2).unwrap();
        assert_eq!(self_loop.to_string(), "7 -> 7 (2)");
    }

    #[test]
    fn test_edge_negative_weight() {
        assert_eq!(Edge::new("X", "Y", -1), Err(Error::NegativeWeight(-1)));
    }
}
