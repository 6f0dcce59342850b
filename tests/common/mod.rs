//! 测试通用工具
//!
//! 提供测试日志初始化和常用的目录数据

#![allow(dead_code)]

use std::sync::Once;

use orgchart::EmployeeRecord;

static INIT: Once = Once::new();

/// 初始化测试环境
pub fn setup() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Alice 带 Bob、Carol 两名下属
pub fn small_directory() -> Vec<EmployeeRecord> {
    vec![
        EmployeeRecord::new("1", "Alice"),
        EmployeeRecord::reporting_to("2", "Bob", "1"),
        EmployeeRecord::reporting_to("3", "Carol", "1"),
    ]
}

/// 多部门、三层、含一条悬空引用的目录
pub fn company_directory() -> Vec<EmployeeRecord> {
    vec![
        EmployeeRecord::new("ceo", "Alice Chen")
            .with_title("Chief Executive Officer")
            .with_department("Executive")
            .with_email("alice@example.com"),
        EmployeeRecord::reporting_to("cto", "Bob Li", "ceo")
            .with_title("CTO")
            .with_department("Engineering"),
        EmployeeRecord::reporting_to("cfo", "Carol Wu", "ceo")
            .with_title("CFO")
            .with_department("Finance"),
        EmployeeRecord::reporting_to("eng-1", "Dave Park", "cto")
            .with_title("Backend Engineer")
            .with_department("Engineering"),
        EmployeeRecord::reporting_to("eng-2", "Erin Zhao", "cto")
            .with_title("Frontend Engineer")
            .with_department("Engineering"),
        EmployeeRecord::reporting_to("contractor", "Dan Moss", "missing-id")
            .with_title("Consultant"),
    ]
}
