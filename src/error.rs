//! 错误类型定义

use crate::graph::Weight;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 图操作错误
///
/// "不存在" 不属于错误：删除不存在的顶点返回 `false`，
/// 查询不存在的顶点返回空映射。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 无效参数：边权重为负数
    #[error("无效参数: 边权重不能为负数, 实际为 {0}")]
    NegativeWeight(Weight),

    #[error("未知的图表示: {0}")]
    UnknownRepresentation(String),
}

impl Error {
    /// 是否属于无效参数类错误
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::NegativeWeight(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::NegativeWeight(-3).to_string(),
            "无效参数: 边权重不能为负数, 实际为 -3"
        );
        assert_eq!(
            Error::UnknownRepresentation("matrix".to_string()).to_string(),
            "未知的图表示: matrix"
        );
    }

    #[test]
    fn test_invalid_argument_category() {
        assert!(Error::NegativeWeight(-1).is_invalid_argument());
        assert!(!Error::UnknownRepresentation(String::new()).is_invalid_argument());
    }
}
