// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的应用状态初始化、名单数据、multipart 请求体构造
// ==========================================

#![allow(dead_code)]

use actix_web::web;
use contest_lottery::app::AppState;
use contest_lottery::config::AppConfig;
use contest_lottery::domain::Candidate;
use std::path::Path;

/// multipart 分隔符
pub const BOUNDARY: &str = "----contest-lottery-test-boundary";

/// 样例名单文件路径
pub const ROSTER_FIXTURE: &str = "tests/fixtures/datasets/roster_sample.csv";

/// 创建测试用应用状态
///
/// # 参数
/// - static_dir: 静态页面目录（通常为临时目录）
pub fn create_test_state(static_dir: &Path) -> web::Data<AppState> {
    create_test_state_with_config(AppConfig {
        static_dir: static_dir.to_path_buf(),
        ..AppConfig::default()
    })
}

/// 使用自定义配置创建测试用应用状态
pub fn create_test_state_with_config(config: AppConfig) -> web::Data<AppState> {
    web::Data::new(AppState::new(config))
}

/// 示例名单: [7820/A, 1000/B, 1000/C]
pub fn example_roster() -> Vec<Candidate> {
    vec![
        Candidate::new("7820", "A"),
        Candidate::new("1000", "B"),
        Candidate::new("1000", "C"),
    ]
}

/// 示例名单的 CSV 文本（含表头）
pub fn example_roster_csv() -> String {
    "dept_id,name\n7820,A\n1000,B\n1000,C\n".to_string()
}

/// 构造单文件 multipart 请求体
///
/// # 返回
/// - String: Content-Type 头
/// - Vec<u8>: 请求体
pub fn multipart_file_body(file_name: &str, content: &[u8]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    (format!("multipart/form-data; boundary={}", BOUNDARY), body)
}

/// 构造不含文件的 multipart 请求体（仅普通文本字段）
pub fn multipart_text_body(name: &str, value: &str) -> (String, Vec<u8>) {
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"{n}\"\r\n\r\n{v}\r\n--{b}--\r\n",
        b = BOUNDARY,
        n = name,
        v = value
    );
    (
        format!("multipart/form-data; boundary={}", BOUNDARY),
        body.into_bytes(),
    )
}
