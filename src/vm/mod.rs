//! 视图层桥接：模型到展示文本的适配

pub mod bridge;
