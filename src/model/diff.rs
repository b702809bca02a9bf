//! 结构化对比（Differencer）：计算两个 JSON 值之间的扁平差异清单
//!
//! 只有"对象 vs 对象"递归展开，数组、标量与类型不一致的组合一律按
//! 原子整体对待：数组任意元素变化报告为一条携带完整新旧数组的 modified
//! 记录，绝不逐元素展开。这是从源行为继承下来的契约，不能悄悄改变

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// 差异类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Added,
    Removed,
    Modified,
}

impl DiffKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffKind::Added => "added",
            DiffKind::Removed => "removed",
            DiffKind::Modified => "modified",
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 差异载荷：新增/删除携带单值，修改携带新旧两值
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DiffPayload {
    Value { value: Value },
    #[serde(rename_all = "camelCase")]
    Change { old_value: Value, new_value: Value },
}

/// 一条结构差异：点分路径 + 类别 + 载荷
///
/// 生命周期很短：一次对比产生，展示后即丢弃，不做持久化
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffRecord {
    pub path: String,
    pub kind: DiffKind,
    #[serde(flatten)]
    pub payload: DiffPayload,
}

impl DiffRecord {
    fn added(path: String, value: Value) -> Self {
        Self { path, kind: DiffKind::Added, payload: DiffPayload::Value { value } }
    }
    fn removed(path: String, value: Value) -> Self {
        Self { path, kind: DiffKind::Removed, payload: DiffPayload::Value { value } }
    }
    fn modified(path: String, old_value: Value, new_value: Value) -> Self {
        Self { path, kind: DiffKind::Modified, payload: DiffPayload::Change { old_value, new_value } }
    }
}

/// 对比两个 JSON 值，返回按键联合顺序排列的差异清单
///
/// 键联合顺序：先按 left 的插入顺序，再补上只出现在 right 中的键；
/// 递归结果在父键被访问的位置就地拼接。纯函数，输入不被修改
pub fn diff_values(left: &Value, right: &Value, path_prefix: &str) -> Vec<DiffRecord> {
    let mut out = Vec::new();
    collect_diffs(left, right, path_prefix, &mut out);
    out
}

fn collect_diffs(left: &Value, right: &Value, prefix: &str, out: &mut Vec<DiffRecord>) {
    // 非对象操作数视为没有任何键
    let empty = serde_json::Map::new();
    let left_map = left.as_object().unwrap_or(&empty);
    let right_map = right.as_object().unwrap_or(&empty);

    let union = left_map
        .keys()
        .chain(right_map.keys().filter(|k| !left_map.contains_key(*k)));

    for key in union {
        let current_path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match (left_map.get(key), right_map.get(key)) {
            (None, Some(rv)) => out.push(DiffRecord::added(current_path, rv.clone())),
            (Some(lv), None) => out.push(DiffRecord::removed(current_path, lv.clone())),
            (Some(lv), Some(rv)) => {
                if lv.is_object() && rv.is_object() {
                    collect_diffs(lv, rv, &current_path, out);
                } else if lv != rv {
                    out.push(DiffRecord::modified(current_path, lv.clone(), rv.clone()));
                }
                // 严格相等：无记录
            }
            (None, None) => unreachable!("键联合中的键至少存在于一侧"),
        }
    }
}
