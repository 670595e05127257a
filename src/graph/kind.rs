//! 图表示的选择

use super::{EdgesGraph, Graph, Label, VerticesGraph};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// 图的内部表示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphKind {
    /// 顶点集合 + 边列表
    #[default]
    Edges,
    /// 顶点对象序列
    Vertices,
}

impl GraphKind {
    /// 所有可用的表示
    pub const ALL: [GraphKind; 2] = [GraphKind::Edges, GraphKind::Vertices];

    /// 表示名称
    pub fn name(&self) -> &'static str {
        match self {
            GraphKind::Edges => "edges",
            GraphKind::Vertices => "vertices",
        }
    }

    /// 创建该表示的空图
    pub fn build<L: Label + 'static>(&self) -> Box<dyn Graph<L>> {
        match self {
            GraphKind::Edges => Box::new(EdgesGraph::new()),
            GraphKind::Vertices => Box::new(VerticesGraph::new()),
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GraphKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "edges" => Ok(GraphKind::Edges),
            "vertices" => Ok(GraphKind::Vertices),
            _ => Err(Error::UnknownRepresentation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("edges".parse::<GraphKind>(), Ok(GraphKind::Edges));
        assert_eq!("Vertices".parse::<GraphKind>(), Ok(GraphKind::Vertices));
        assert_eq!(
            "matrix".parse::<GraphKind>(),
            Err(Error::UnknownRepresentation("matrix".to_string()))
        );
    }

    #[test]
    fn test_kind_display_roundtrip() {
        for kind in GraphKind::ALL {
            assert_eq!(kind.to_string().parse::<GraphKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_kind_build() {
        for kind in GraphKind::ALL {
            let mut g = kind.build::<String>();
            assert!(g.add("X".to_string()));
            assert_eq!(g.set("X".to_string(), "Y".to_string(), 2), Ok(0));
            assert_eq!(g.vertices().len(), 2);
        }
    }

    #[test]
    fn test_kind_default() {
        assert_eq!(GraphKind::default(), GraphKind::Edges);
    }
}
