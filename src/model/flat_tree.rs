//! 扁平树投影：把不可变展示树拍平为带深度/展开状态的节点列表
//!
//! 展开/折叠与可见性是纯 UI 状态，只存在于这份投影上，
//! 不会回写展示树，更不会触碰底层 JSON 值

use crate::model::visual_tree::{NodeKind, TreeNode};

#[derive(Debug, Clone)]
pub struct FlatTreeNode {
    /// 节点在父级中的键名或索引的字符串形式；根为 "$"
    pub name: String,
    /// RFC 9535 JSONPath（用于节点寻址与子树提取）
    pub path: String,
    /// 节点类型
    pub kind: NodeKind,
    /// 直接子节点数量（对象字段数 / 数组长度）
    pub children: u32,
    /// 展示文本（复合节点头部或标量字面文本）
    pub text: String,
    /// 节点深度（用于缩进显示）
    pub depth: u32,
    /// 是否展开（折叠开关状态）
    pub expanded: bool,
    /// 是否可见（由祖先的展开状态推导）
    pub visible: bool,
}

/// JSONPath 字段段：含特殊字符的键使用 bracket-notation
fn field_path(parent: &str, key: &str) -> String {
    if !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        format!("{}.{}", parent, key)
    } else {
        format!("{}['{}']", parent, key.replace('\'', "\\'"))
    }
}

/// 深度优先走查展示树，产出扁平索引（默认全部折叠、全部可见）
pub fn flatten_tree(root: &TreeNode) -> Vec<FlatTreeNode> {
    fn push_node(out: &mut Vec<FlatTreeNode>, node: &TreeNode, name: &str, path: &str, depth: u32) {
        out.push(FlatTreeNode {
            name: name.to_string(),
            path: path.to_string(),
            kind: node.kind,
            children: node.children.len() as u32,
            text: node.text.clone(),
            depth,
            expanded: false,
            visible: true,
        });
    }
    fn walk(out: &mut Vec<FlatTreeNode>, node: &TreeNode, name: &str, path: &str, depth: u32) {
        push_node(out, node, name, path, depth);
        match node.kind {
            NodeKind::Object => {
                for child in &node.children {
                    let key = child.label.as_deref().unwrap_or_default();
                    let child_path = field_path(path, key);
                    walk(out, child, key, &child_path, depth + 1);
                }
            }
            NodeKind::Array => {
                for child in &node.children {
                    // 渲染阶段已经给数组子项打了 "[索引]" 标签
                    let idx = child.label.as_deref().unwrap_or_default();
                    let child_path = format!("{}{}", path, idx);
                    walk(out, child, idx, &child_path, depth + 1);
                }
            }
            _ => {}
        }
    }

    let mut out = Vec::with_capacity(1024);
    let root_name = root.label.as_deref().unwrap_or("$");
    walk(&mut out, root, root_name, "$", 0);
    out
}
