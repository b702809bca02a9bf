//! 性能冒烟演示：`cargo run --example performance_benchmark`

use json_chakanqi::model::performance::run_performance_suite;

fn main() {
    for result in run_performance_suite() {
        let flag = if result.success { "通过" } else { "失败" };
        println!(
            "[{}] {}  {}ms  {}",
            flag, result.operation, result.duration_ms, result.details
        );
    }
}
