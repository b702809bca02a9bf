//! Clipboard  cross-platform clipboard helpers
//!
//! 复制是查看器里唯一可能失败但不致命的外设操作：
//! 失败向上传播为用户可见消息，后续操作不受影响

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard error: {0}")]
    Clip(String),
}

/// 将文本复制到系统剪贴板
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    use copypasta::{ClipboardContext, ClipboardProvider};
    let mut ctx = ClipboardContext::new().map_err(|e| ClipboardError::Clip(e.to_string()))?;
    ctx.set_contents(text.to_string())
        .map_err(|e| ClipboardError::Clip(e.to_string()))
}

/// 从系统剪贴板获取文本（用于测试）
#[cfg(test)]
pub fn get_clipboard_contents() -> Result<String, ClipboardError> {
    use copypasta::{ClipboardContext, ClipboardProvider};
    let mut ctx = ClipboardContext::new().map_err(|e| ClipboardError::Clip(e.to_string()))?;
    ctx.get_contents()
        .map_err(|e| ClipboardError::Clip(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 无显示环境（CI容器）下拿不到剪贴板上下文，此时直接跳过断言
    fn clipboard_available() -> bool {
        copy_to_clipboard("探测").is_ok()
    }

    #[test]
    fn test_clipboard_copy_and_get() {
        if !clipboard_available() {
            return;
        }

        let test_text = "测试剪贴板功能";
        copy_to_clipboard(test_text).expect("复制到剪贴板应该成功");

        let clipboard_content = get_clipboard_contents().expect("从剪贴板读取应该成功");
        assert_eq!(clipboard_content, test_text, "剪贴板内容应该与复制的文本一致");
    }

    #[test]
    fn test_clipboard_unicode() {
        if !clipboard_available() {
            return;
        }

        let unicode_text = "🚀 JSON查看器 🎯 Unicode字符 ✨";
        copy_to_clipboard(unicode_text).expect("复制Unicode文本应该成功");
        assert_eq!(get_clipboard_contents().unwrap(), unicode_text);
    }
}
