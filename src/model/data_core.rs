//! ViewerState：查看器核心状态与节点寻址

use std::path::{Path, PathBuf};

use jsonpath_rust::JsonPath; // 提供 query 等扩展
use serde_json::Value;
use thiserror::Error;

use crate::model::flat_tree::{flatten_tree, FlatTreeNode};
use crate::model::visual_tree::{render_tree, TreeNode};
use crate::utils::fs::read_json_file;

/// 当前展示面板（树形 / 美化 / 对比）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    #[default]
    Tree,
    Beautify,
    Compare,
}

impl ViewKind {
    /// 按面板名解析；未知名字返回 None，由调用方映射为 MissingTarget
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "tree" => Some(ViewKind::Tree),
            "beautify" => Some(ViewKind::Beautify),
            "compare" => Some(ViewKind::Compare),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Tree => "tree",
            ViewKind::Beautify => "beautify",
            ViewKind::Compare => "compare",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON解析失败: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("JSONPath错误: {0}")]
    JsonPath(String),
    #[error("目标面板不存在: {0}")]
    MissingTarget(String),
    #[error("状态错误: {0}")]
    State(String),
    #[error("剪贴板失败: {0}")]
    Clipboard(#[from] crate::utils::clipboard::ClipboardError),
}

/// 查看器会话状态：已解析文档、展示树及其扁平投影、当前面板
///
/// 渲染与对比算法本身无状态；"当前面板"这类状态只属于展示会话
#[derive(Debug, Default)]
pub struct ViewerState {
    pub source_path: Option<PathBuf>,
    pub dom: Option<Value>,
    pub tree_root: Option<TreeNode>,
    pub tree_flat: Vec<FlatTreeNode>,
    pub current_view: ViewKind,
}

impl ViewerState {
    /// 加载JSON文件并构建展示树
    pub fn load_file(&mut self, p: &Path) -> Result<(), AppError> {
        let dom = read_json_file(p)?;
        self.source_path = Some(p.to_path_buf());
        self.set_document(dom);
        Ok(())
    }

    /// 解析原始文本并构建展示树；解析失败时原有状态保持不变
    pub fn load_text(&mut self, text: &str) -> Result<(), AppError> {
        let dom: Value = serde_json::from_str(text)?;
        self.set_document(dom);
        Ok(())
    }

    /// 用已解码的值替换当前文档，重建展示树与扁平投影
    pub fn set_document(&mut self, dom: Value) {
        let root = render_tree(&dom, None);
        self.tree_flat = flatten_tree(&root);
        // 根节点默认展开，露出第一层
        if let Some(first) = self.tree_flat.first_mut() {
            first.expanded = true;
        }
        self.update_visibility_by_expansion();
        self.tree_root = Some(root);
        self.dom = Some(dom);
        tracing::info!("文档已加载，共 {} 个节点", self.tree_flat.len());
    }

    /// 切换展示面板；未知面板名记录日志并返回 MissingTarget
    pub fn change_view(&mut self, name: &str) -> Result<ViewKind, AppError> {
        match ViewKind::parse(name) {
            Some(view) => {
                self.current_view = view;
                Ok(view)
            }
            None => {
                tracing::warn!("请求了不存在的面板: {}", name);
                Err(AppError::MissingTarget(name.to_string()))
            }
        }
    }

    /// 按 JSONPath 提取第一个匹配节点的 pretty 字符串
    pub fn extract_subtree_pretty(&self, json_path: &str) -> Result<String, AppError> {
        let dom = self
            .dom
            .as_ref()
            .ok_or_else(|| AppError::State("文档尚未加载".into()))?;
        let hits: Vec<&Value> = dom
            .query(json_path)
            .map_err(|e| AppError::JsonPath(e.to_string()))?;
        let first = hits
            .into_iter()
            .next()
            .ok_or_else(|| AppError::JsonPath("未匹配到任何节点".into()))?;
        Ok(serde_json::to_string_pretty(first)?)
    }

    /// 切换节点的展开状态
    pub fn toggle_node_expanded(&mut self, path: &str) {
        if let Some(node) = self.tree_flat.iter_mut().find(|n| n.path == path) {
            node.expanded = !node.expanded;
        }
        self.update_visibility_by_expansion();
    }

    /// 展开全部复合节点
    pub fn expand_all(&mut self) {
        for node in &mut self.tree_flat {
            node.expanded = node.children > 0;
        }
        self.update_visibility_by_expansion();
    }

    /// 展开到指定深度（深度小于 max_depth 的复合节点展开，其余折叠）
    pub fn expand_to_depth(&mut self, max_depth: u32) {
        for node in &mut self.tree_flat {
            node.expanded = node.children > 0 && node.depth < max_depth;
        }
        self.update_visibility_by_expansion();
    }

    /// 根据展开状态更新节点可见性
    pub fn update_visibility_by_expansion(&mut self) {
        // 先只保留根节点可见
        for (i, node) in self.tree_flat.iter_mut().enumerate() {
            node.visible = i == 0;
        }

        // 扁平列表是DFS序：展开且可见的节点逐层放出直接子节点
        for i in 0..self.tree_flat.len() {
            if self.tree_flat[i].expanded && self.tree_flat[i].visible {
                let parent_depth = self.tree_flat[i].depth;
                for j in (i + 1)..self.tree_flat.len() {
                    if self.tree_flat[j].depth == parent_depth + 1 {
                        self.tree_flat[j].visible = true;
                    } else if self.tree_flat[j].depth <= parent_depth {
                        break; // 已经超出当前父节点的范围
                    }
                }
            }
        }
    }

    /// 当前可见的节点（按DFS顺序）
    pub fn visible_nodes(&self) -> Vec<&FlatTreeNode> {
        self.tree_flat.iter().filter(|n| n.visible).collect()
    }

    /// 内置示例文档（演示与冒烟测试用）
    pub fn sample_document() -> Value {
        serde_json::json!({
            "name": "John Doe",
            "age": 30,
            "email": "john@example.com",
            "address": {
                "street": "123 Main St",
                "city": "New York",
                "country": "USA"
            },
            "hobbies": ["reading", "gaming", "coding"],
            "active": true
        })
    }
}
