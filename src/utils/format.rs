//! 美化/压缩：委托 serde_json 编解码，不做任何自定义语法解析

use serde_json::Value;

use crate::model::data_core::AppError;

/// 解析原始文本为JSON值；失败时返回带位置信息的描述性错误
pub fn parse_json(text: &str) -> Result<Value, AppError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(value)
}

/// 美化输出（2空格缩进）
pub fn beautify(text: &str) -> Result<String, AppError> {
    let value = parse_json(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// 压缩输出（去除所有空白）
pub fn minify(text: &str) -> Result<String, AppError> {
    let value = parse_json(text)?;
    Ok(serde_json::to_string(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_beautify_round_trip() {
        let input = r#"{"name":"John","age":30}"#;
        let pretty = beautify(input).expect("美化应该成功");

        assert!(pretty.contains('\n'), "美化输出应该是多行的");
        assert!(pretty.contains("  \"name\""), "美化输出应该使用2空格缩进");

        // 重新解码必须还原出相同结构（键、值、类型均保持）
        let reparsed = parse_json(&pretty).unwrap();
        assert_eq!(reparsed, json!({"name": "John", "age": 30}));
    }

    #[test]
    fn test_minify_strips_whitespace() {
        let input = "{\n  \"a\": [1, 2,\n 3],\n  \"b\": null\n}";
        let compact = minify(input).expect("压缩应该成功");
        assert_eq!(compact, r#"{"a":[1,2,3],"b":null}"#);
    }

    #[test]
    fn test_pretty_and_minified_decode_equal() {
        let input = r#"{"嵌套":{"数组":[true,null,1.25],"文本":"值"}}"#;
        let pretty = beautify(input).unwrap();
        let compact = minify(input).unwrap();
        assert_eq!(parse_json(&pretty).unwrap(), parse_json(&compact).unwrap());
    }

    #[test]
    fn test_parse_error_is_descriptive() {
        let result = parse_json(r#"{"trailing": 1,}"#);
        let err = result.expect_err("非法JSON应该报错");
        assert!(!err.to_string().is_empty());
        assert!(err.to_string().contains("JSON解析失败"));
    }

    #[test]
    fn test_scalar_documents_are_valid() {
        // 标准语法允许顶层标量
        assert_eq!(minify(" 42 ").unwrap(), "42");
        assert_eq!(minify("\"文本\"").unwrap(), "\"文本\"");
    }
}
