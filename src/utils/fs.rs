//! IO helper: safe file read/write for JSON text

use std::{fs::File, io::BufReader, path::Path};

use serde_json::Value;

use crate::model::data_core::AppError;

/// 从文件读取JSON数据
pub fn read_json_file(p: &Path) -> Result<Value, AppError> {
    let f = File::open(p)?;
    let rdr = BufReader::new(f);
    let v: Value = serde_json::from_reader(rdr)?;
    Ok(v)
}

/// 将已格式化的文本保存到文件（追加换行，便于终端工具链）
pub fn write_text_file(p: &Path, text: &str) -> Result<(), AppError> {
    let mut content = text.to_string();
    if !content.ends_with('\n') {
        content.push('\n');
    }
    std::fs::write(p, content)?;
    Ok(())
}
