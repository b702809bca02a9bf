//! 工具模块：文件IO、剪贴板、格式化

pub mod clipboard;
pub mod format;
pub mod fs;
