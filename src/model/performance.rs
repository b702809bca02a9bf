//! 性能冒烟模块
//!
//! 用于测试大文档的解析、树渲染与结构对比耗时
//! 操作均为同步纯计算，耗时应与文档规模线性相关

use std::time::Instant;

use serde_json::{json, Value};

use crate::model::diff::diff_values;
use crate::model::flat_tree::flatten_tree;
use crate::model::visual_tree::render_tree;

/// 性能测试结果
#[derive(Debug)]
pub struct PerformanceResult {
    pub operation: String,
    pub duration_ms: u128,
    pub success: bool,
    pub details: String,
}

impl PerformanceResult {
    pub fn new(operation: &str, duration_ms: u128, success: bool, details: &str) -> Self {
        Self {
            operation: operation.to_string(),
            duration_ms,
            success,
            details: details.to_string(),
        }
    }
}

/// 生成大型测试JSON数据（指定嵌套深度与每层宽度）
pub fn generate_large_json(depth: usize, width: usize) -> Value {
    fn create_nested_object(current_depth: usize, max_depth: usize, width: usize) -> Value {
        if current_depth >= max_depth {
            return json!("叶子节点值");
        }

        let mut obj = serde_json::Map::new();
        for i in 0..width {
            let key = format!("field_{}", i);
            let value = match i % 5 {
                0 => json!(format!("字符串值_{}", i)),
                1 => json!(i as i64),
                2 => json!(i % 2 == 0),
                3 => json!([1, 2, 3, i]),
                4 => create_nested_object(current_depth + 1, max_depth, width / 2),
                _ => json!(null),
            };
            obj.insert(key, value);
        }
        Value::Object(obj)
    }

    let mut root = serde_json::Map::new();
    root.insert("data".to_string(), create_nested_object(0, depth, width));
    let large_array: Vec<Value> = (0..width * 10)
        .map(|i| json!({"id": i, "name": format!("项目_{}", i), "active": i % 3 == 0}))
        .collect();
    root.insert("items".to_string(), json!(large_array));
    Value::Object(root)
}

/// 测试JSON解析性能
pub fn benchmark_json_parsing(json_str: &str) -> PerformanceResult {
    let start = Instant::now();
    let parse_result = serde_json::from_str::<Value>(json_str);
    let duration = start.elapsed();

    match parse_result {
        Ok(_) => PerformanceResult::new(
            "JSON解析",
            duration.as_millis(),
            true,
            &format!("解析了 {} 字节", json_str.len()),
        ),
        Err(e) => PerformanceResult::new(
            "JSON解析",
            duration.as_millis(),
            false,
            &format!("解析失败: {}", e),
        ),
    }
}

/// 测试树渲染（含扁平投影）性能
pub fn benchmark_render_tree(json_data: &Value) -> PerformanceResult {
    let start = Instant::now();
    let root = render_tree(json_data, None);
    let flat = flatten_tree(&root);
    let duration = start.elapsed();

    PerformanceResult::new(
        "树渲染",
        duration.as_millis(),
        !flat.is_empty(),
        &format!("渲染了 {} 个节点", flat.len()),
    )
}

/// 测试结构对比性能（与一个轻微改动的副本对比）
pub fn benchmark_diff(json_data: &Value) -> PerformanceResult {
    let mut modified = json_data.clone();
    if let Some(obj) = modified.as_object_mut() {
        obj.insert("__扰动__".to_string(), json!(true));
    }

    let start = Instant::now();
    let records = diff_values(json_data, &modified, "");
    let duration = start.elapsed();

    PerformanceResult::new(
        "结构对比",
        duration.as_millis(),
        records.len() == 1,
        &format!("产生 {} 条差异记录", records.len()),
    )
}

/// 运行综合性能冒烟
pub fn run_performance_suite() -> Vec<PerformanceResult> {
    let mut results = Vec::new();

    // 小型 / 中型 / 大型
    let test_cases = [(3, 10), (4, 20), (5, 30)];

    for (depth, width) in test_cases {
        let json_data = generate_large_json(depth, width);
        let json_str = match serde_json::to_string(&json_data) {
            Ok(s) => s,
            Err(e) => {
                results.push(PerformanceResult::new(
                    &format!("序列化({}x{})", depth, width),
                    0,
                    false,
                    &e.to_string(),
                ));
                continue;
            }
        };

        results.push(benchmark_json_parsing(&json_str));
        results.push(benchmark_render_tree(&json_data));
        results.push(benchmark_diff(&json_data));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_large_json() {
        let json = generate_large_json(2, 3);
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("data"));
        assert!(obj.contains_key("items"));
        assert_eq!(obj["items"].as_array().unwrap().len(), 30);
    }

    #[test]
    fn test_benchmarks_succeed() {
        let json = generate_large_json(2, 5);

        let render_result = benchmark_render_tree(&json);
        assert!(render_result.success);
        assert!(render_result.duration_ms < 1000, "小规模渲染应该在1秒内完成");

        let diff_result = benchmark_diff(&json);
        assert!(diff_result.success, "扰动对比应该恰好产生1条记录");

        let json_str = serde_json::to_string(&json).unwrap();
        assert!(benchmark_json_parsing(&json_str).success);
    }
}
