//! 调试输出的集合/映射格式
//!
//! 集合输出为 `[A, B]`，映射输出为 `{K=V, K=V}`，空集合分别为 `[]` 和 `{}`。

use std::fmt::{self, Display, Formatter};

/// 以 `[A, B]` 格式写出集合
pub(crate) fn write_set<'a, T, I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

/// 以 `{K=V, K=V}` 格式写出映射
pub(crate) fn write_map<'a, K, V, I>(f: &mut Formatter<'_>, entries: I) -> fmt::Result
where
    K: Display + 'a,
    V: Display + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    f.write_str("{")?;
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}={}", key, value)?;
    }
    f.write_str("}")
}
