//! 可视化树（Visual Tree）：将解析后的 JSON 值投影为不可变的嵌套展示树
//!
//! 渲染算法为纯函数：深度优先、先序遍历，不修改输入值，
//! 展示层通过适配器（见 flat_tree）走查结果，算法与界面工具解耦

use serde_json::Value;

/// JSON 节点类型（与 UI 展示解耦）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

/// 展示树节点：渲染的纯输出，不持有对源 Value 的引用
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// 父级中的键名或 "[索引]"；根节点为 None
    pub label: Option<String>,
    /// 节点类型
    pub kind: NodeKind,
    /// 展示文本：复合节点为 "Array[N]"/"Object{N}" 头部，标量节点为字面文本
    pub text: String,
    /// 子节点（保持源文档的插入顺序）
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// 复合节点（对象/数组）携带折叠开关，标量节点没有
    pub fn is_composite(&self) -> bool {
        matches!(self.kind, NodeKind::Object | NodeKind::Array)
    }

    /// 叶子节点总数（标量计1，复合节点为子树之和）
    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            1
        } else {
            self.children.iter().map(TreeNode::leaf_count).sum()
        }
    }
}

/// 判定 Value 对应的节点类型
pub fn kind_of(v: &Value) -> NodeKind {
    match v {
        Value::Object(_) => NodeKind::Object,
        Value::Array(_) => NodeKind::Array,
        Value::String(_) => NodeKind::String,
        Value::Number(_) => NodeKind::Number,
        Value::Bool(_) => NodeKind::Bool,
        Value::Null => NodeKind::Null,
    }
}

/// 标量展示文本：null 字面量 / 带引号字符串 / 数字与布尔的字面形式
fn scalar_text(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::String(s) => format!("\"{}\"", s),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // 复合节点走 render_tree 的头部分支，不会到这里
        Value::Object(m) => format!("Object{{{}}}", m.len()),
        Value::Array(a) => format!("Array[{}]", a.len()),
    }
}

/// 深度优先渲染：数组子项标签为 "[索引]"，对象子项标签为键名
///
/// 递归深度等于 JSON 嵌套深度；解码后的 JSON 无环，无需环检测
pub fn render_tree(value: &Value, label: Option<&str>) -> TreeNode {
    let label = label.map(str::to_string);
    match value {
        Value::Array(items) => TreeNode {
            label,
            kind: NodeKind::Array,
            text: format!("Array[{}]", items.len()),
            children: items
                .iter()
                .enumerate()
                .map(|(idx, item)| render_tree(item, Some(&format!("[{}]", idx))))
                .collect(),
        },
        Value::Object(map) => TreeNode {
            label,
            kind: NodeKind::Object,
            text: format!("Object{{{}}}", map.len()),
            children: map
                .iter()
                .map(|(key, child)| render_tree(child, Some(key)))
                .collect(),
        },
        scalar => TreeNode {
            label,
            kind: kind_of(scalar),
            text: scalar_text(scalar),
            children: Vec::new(),
        },
    }
}
