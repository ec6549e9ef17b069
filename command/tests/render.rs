use chrono::Utc;
use command::render::{
    or_dash, render_function_view, render_functions, render_status, render_triggers,
    total_executions,
};
use proxy::describe::FunctionView;
use proxy::probe::{ProbeError, ProbeResult};
use proxy::status::{StatusView, SystemStatus};
use std::time::Duration;
use utility::model::{Function, Language, Trigger};
use utility::telemetry::{ExecutionMetric, HealthReport, LogEntry};

fn ok<T>(value: T) -> ProbeResult<T> {
    ProbeResult {
        result: Ok(value),
        latency: Duration::from_millis(7),
    }
}

fn failed<T>(err: ProbeError) -> ProbeResult<T> {
    ProbeResult {
        result: Err(err),
        latency: Duration::from_millis(3000),
    }
}

fn metrics() -> Vec<ExecutionMetric> {
    vec![
        ExecutionMetric {
            time_bucket: "2024-05-01 10:00:00".into(),
            count: 4,
        },
        ExecutionMetric {
            time_bucket: "2024-05-01 10:01:00".into(),
            count: 9,
        },
    ]
}

#[test]
fn test_or_dash() {
    assert_eq!(or_dash(&ok(3usize), |n| n.to_string()), "3");
    assert_eq!(
        or_dash(&failed::<usize>(ProbeError::Timeout), |n| n.to_string()),
        "- (timed out)"
    );
}

#[test]
fn test_total_executions() {
    assert_eq!(total_executions(&metrics()), 13);
    assert_eq!(total_executions(&[]), 0);
}

#[test]
fn test_render_status_partial() {
    let view = StatusView {
        status: SystemStatus::Operational,
        checked_at: Utc::now(),
        liveness: ok(HealthReport {
            status: "ok".into(),
        }),
        functions: ok(3),
        triggers: failed(ProbeError::Status(503)),
        metrics: ok(metrics()),
        logs: failed(ProbeError::Timeout),
    };

    let text = render_status(&view);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("Status:"));
    assert!(lines[0].ends_with("Operational"));
    assert!(lines[2].ends_with("ok (7 ms)"));
    assert!(lines[3].ends_with("3"));
    assert!(lines[4].ends_with("- (unexpected status code 503)"));
    assert!(lines[5].ends_with("13"));
    assert!(lines[6].ends_with("- (timed out)"));
}

#[test]
fn test_render_function_view() {
    let view = FunctionView {
        checked_at: Utc::now(),
        function: ok(Function {
            name: "hello".into(),
            language: Language::Rust,
            executable: "/data/hello.wasm".into(),
            cpu: "100m".into(),
            memory: "128Mi".into(),
            readonly: false,
        }),
        metrics: failed(ProbeError::Connection("refused".into())),
        logs: ok(vec![LogEntry {
            timestamp: "2024-05-01 10:00:00".into(),
            level: "info".into(),
            body: "served /hello".into(),
            ..Default::default()
        }]),
    };

    let text = render_function_view("hello", &view);
    assert!(text.contains("Language:"));
    assert!(text.contains("rust"));
    assert!(text.contains("/data/hello.wasm"));
    assert!(text.contains("- (connection error: refused)"));
    assert!(text.contains("  2024-05-01 10:00:00 INFO served /hello"));
}

#[test]
fn test_render_function_view_missing_function() {
    let view = FunctionView {
        checked_at: Utc::now(),
        function: failed(ProbeError::Status(404)),
        metrics: ok(vec![]),
        logs: ok(vec![]),
    };

    let text = render_function_view("ghost", &view);
    assert!(text.starts_with("Name:"));
    assert!(text.contains("- (unexpected status code 404)"));
    assert!(!text.contains("Language:"));
    assert!(text.contains("none"));
}

#[test]
fn test_render_functions_and_triggers() {
    let functions = vec![Function {
        name: "hello".into(),
        executable: "/data/hello.wasm".into(),
        readonly: true,
        ..Default::default()
    }];
    let text = render_functions(&functions, false);
    assert!(text.starts_with("Function"));
    assert!(text.contains("hello"));
    assert!(text.contains("python"));
    assert!(!text.contains("/data/hello.wasm"));
    assert!(render_functions(&functions, true).contains("/data/hello.wasm"));

    let triggers = vec![Trigger {
        name: "t1".into(),
        method: "GET".into(),
        path: "/hello".into(),
        function_name: "hello".into(),
        readonly: false,
    }];
    let text = render_triggers(&triggers);
    assert_eq!(text.lines().count(), 2);
    let row = text.lines().nth(1).unwrap();
    assert!(row.starts_with("t1"));
    assert!(row.contains("GET"));
    assert!(row.contains("/hello"));
    assert!(row.ends_with("hello"));
}
