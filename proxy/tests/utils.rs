use proxy::utils::*;
use reqwest::Url;

#[test]
fn test_create_invocation_endpoint() {
    struct TestCase {
        _title: &'static str,
        gateway: &'static str,
        path: &'static str,
        expected_endpoint: &'static str,
    }
    let cases = vec![
        TestCase {
            _title: "root gateway",
            gateway: "http://127.0.0.1:8080",
            path: "/hello",
            expected_endpoint: "http://127.0.0.1:8080/function/hello",
        },
        TestCase {
            _title: "gateway with base path",
            gateway: "http://127.0.0.1:8080/api/",
            path: "/hello",
            expected_endpoint: "http://127.0.0.1:8080/api/function/hello",
        },
        TestCase {
            _title: "nested trigger path is kept as is",
            gateway: "http://127.0.0.1:8080",
            path: "/orders/new/",
            expected_endpoint: "http://127.0.0.1:8080/function/orders/new/",
        },
    ];

    for case in cases {
        let gateway = Url::parse(case.gateway).unwrap();
        let endpoint = create_invocation_endpoint(&gateway, case.path).unwrap();
        assert_eq!(endpoint.as_str(), case.expected_endpoint, "{}", case._title);
    }
}

#[test]
fn test_registry_paths() {
    assert_eq!(function_path("f1"), "/functions/f1");
    assert_eq!(trigger_path("t1"), "/triggers/t1");
    assert_eq!(function_logs_path("f1"), "/telemetry/functions/f1/logs");
    assert_eq!(function_metrics_path("f1"), "/telemetry/functions/f1/metrics");
}
