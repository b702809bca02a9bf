//! 核心数据模型与算法：展示树渲染、扁平投影、结构对比、会话状态

pub mod data_core;
pub mod diff;
pub mod flat_tree;
pub mod performance;
pub mod visual_tree;
