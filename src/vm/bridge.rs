//! 视图桥接层：核心模型到终端文本的转换与状态常量

use crate::model::diff::{DiffPayload, DiffRecord};
use crate::model::flat_tree::FlatTreeNode;

// === 常量定义（消除魔法值） ===
pub const STATUS_COPIED: &str = "已复制到剪贴板";
pub const STATUS_ERROR_PREFIX: &str = "错误: ";
pub const MSG_IDENTICAL: &str = "两个JSON对象完全一致！";
pub const LABEL_RAW_INPUT: &str = "原始输入: ";

/// 折叠开关字形（展开 / 折叠）
pub const GLYPH_EXPANDED: &str = "▼";
pub const GLYPH_COLLAPSED: &str = "▶";

/// 单个节点的展示行：缩进 + 开关字形 + "标签: " 前缀 + 展示文本
pub fn render_tree_line(node: &FlatTreeNode) -> String {
    let indent = "  ".repeat(node.depth as usize);
    let glyph = if node.children > 0 {
        if node.expanded {
            format!("{} ", GLYPH_EXPANDED)
        } else {
            format!("{} ", GLYPH_COLLAPSED)
        }
    } else {
        String::new()
    };
    // 根节点没有来自父级的标签
    let label = if node.depth == 0 {
        String::new()
    } else {
        format!("{}: ", node.name)
    };
    format!("{}{}{}{}", indent, glyph, label, node.text)
}

/// 将可见节点渲染为缩进文本（展示层适配器，按DFS顺序走查投影）
pub fn render_tree_lines<'a, I>(nodes: I) -> String
where
    I: IntoIterator<Item = &'a FlatTreeNode>,
{
    let lines: Vec<String> = nodes
        .into_iter()
        .filter(|n| n.visible)
        .map(render_tree_line)
        .collect();
    lines.join("\n")
}

/// 差异详情的人类可读渲染（按差异类别区分）
pub fn render_diff_details(record: &DiffRecord) -> String {
    match &record.payload {
        DiffPayload::Value { value } => format!("Value: {}", value),
        DiffPayload::Change { old_value, new_value } => {
            format!("Old: {} New: {}", old_value, new_value)
        }
    }
}

/// 差异清单渲染为文本表格 {路径, 类型, 详情}；空清单输出一致提示
pub fn render_diff_table(records: &[DiffRecord]) -> String {
    if records.is_empty() {
        return MSG_IDENTICAL.to_string();
    }

    let path_width = records
        .iter()
        .map(|r| r.path.chars().count())
        .chain(std::iter::once(4))
        .max()
        .unwrap_or(4);

    let mut out = String::new();
    out.push_str(&format!("{:<width$}  {:<8}  {}\n", "路径", "类型", "详情", width = path_width));
    for record in records {
        out.push_str(&format!(
            "{:<width$}  {:<8}  {}\n",
            record.path,
            record.kind.as_str(),
            render_diff_details(record),
            width = path_width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::diff::diff_values;
    use crate::model::flat_tree::flatten_tree;
    use crate::model::visual_tree::render_tree;
    use serde_json::json;

    #[test]
    fn test_tree_lines_shape() {
        let root = render_tree(&json!({"a": [1], "b": "文本"}), None);
        let mut flat = flatten_tree(&root);
        for node in &mut flat {
            node.expanded = node.children > 0;
        }

        let text = render_tree_lines(flat.iter());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "▼ Object{2}", "根节点无标签前缀");
        assert_eq!(lines[1], "  ▼ a: Array[1]");
        assert_eq!(lines[2], "    [0]: 1", "标量行没有折叠字形");
        assert_eq!(lines[3], "  b: \"文本\"");
    }

    #[test]
    fn test_collapsed_glyph() {
        let root = render_tree(&json!({"a": {"b": 1}}), None);
        let flat = flatten_tree(&root);
        // 默认折叠
        assert!(render_tree_line(&flat[0]).starts_with("▶ "));
    }

    #[test]
    fn test_hidden_nodes_are_skipped() {
        let root = render_tree(&json!({"a": 1, "b": 2}), None);
        let mut flat = flatten_tree(&root);
        flat[2].visible = false;

        let text = render_tree_lines(flat.iter());
        assert!(text.contains("a: 1"));
        assert!(!text.contains("b: 2"));
    }

    #[test]
    fn test_diff_details_rendering() {
        let records = diff_values(&json!({"a": 1, "b": 1}), &json!({"a": 2}), "");
        assert_eq!(render_diff_details(&records[0]), "Old: 1 New: 2");
        assert_eq!(render_diff_details(&records[1]), "Value: 1");
    }

    #[test]
    fn test_diff_table_identical_notice() {
        assert_eq!(render_diff_table(&[]), MSG_IDENTICAL);
    }

    #[test]
    fn test_diff_table_rows() {
        let records = diff_values(
            &json!({"user": {"age": 30}}),
            &json!({"user": {"age": 31}, "active": true}),
            "",
        );
        let table = render_diff_table(&records);
        assert!(table.contains("user.age"));
        assert!(table.contains("modified"));
        assert!(table.contains("Old: 30 New: 31"));
        assert!(table.contains("added"));
        assert!(table.contains("Value: true"));
    }
}
