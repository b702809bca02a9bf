//! JSON查看器核心库
//!
//! 提供JSON树形渲染、美化/压缩与结构对比功能
//! 渲染与对比算法均为纯函数；展示层（CLI或其他宿主）
//! 负责文本解码失败的提示，并通过适配器走查渲染结果

pub mod model;
pub mod utils;
pub mod vm;

// 重新导出主要类型
pub use model::data_core::{AppError, ViewKind, ViewerState};
pub use model::diff::{diff_values, DiffKind, DiffPayload, DiffRecord};
pub use model::flat_tree::{flatten_tree, FlatTreeNode};
pub use model::visual_tree::{render_tree, NodeKind, TreeNode};
