use proxy::client::Client;
use proxy::probe::ProbeError;
use proxy::utils::{function_logs_path, function_metrics_path, function_path, FUNCTIONS_PATH};
use proxy::TestAuth;
use std::time::Duration;
use utility::model::Function;
use utility::telemetry::ExecutionMetric;
use utility::Error;

fn function(name: &str) -> Function {
    Function {
        name: name.into(),
        executable: format!("/data/{}.wasm", name),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_get_function_direct() {
    let body = serde_json::to_string(&function("f1")).unwrap();
    let _direct = mockito::mock("GET", function_path("f1").as_str())
        .with_status(200)
        .with_body(body)
        .create();
    let list = mockito::mock("GET", FUNCTIONS_PATH).expect(0).create();

    let auth = TestAuth {};
    let client = Client::new(Box::new(&auth), mockito::server_url().as_str()).unwrap();
    let res = client.get_function("f1").await;
    assert_eq!(res.unwrap(), Some(function("f1")));
    list.assert();
}

#[tokio::test]
async fn test_get_function_falls_back_to_list() {
    let body = serde_json::to_string(&vec![function("f1"), function("f2")]).unwrap();
    let _direct = mockito::mock("GET", function_path("f2").as_str())
        .with_status(404)
        .create();
    let _list = mockito::mock("GET", FUNCTIONS_PATH)
        .with_status(200)
        .with_body(body)
        .create();

    let auth = TestAuth {};
    let client = Client::new(Box::new(&auth), mockito::server_url().as_str()).unwrap();
    let res = client.get_function("f2").await;
    assert_eq!(res.unwrap(), Some(function("f2")));
}

#[tokio::test]
async fn test_get_function_missing_everywhere() {
    let body = serde_json::to_string(&vec![function("f1")]).unwrap();
    let _direct = mockito::mock("GET", function_path("nope").as_str())
        .with_status(404)
        .create();
    let _list = mockito::mock("GET", FUNCTIONS_PATH)
        .with_status(200)
        .with_body(body)
        .create();

    let auth = TestAuth {};
    let client = Client::new(Box::new(&auth), mockito::server_url().as_str()).unwrap();
    let res = client.get_function("nope").await;
    assert_eq!(res.unwrap(), None);
}

#[tokio::test]
async fn test_get_function_without_fallback() {
    let _direct = mockito::mock("GET", function_path("f1").as_str())
        .with_status(404)
        .create();
    let _broken = mockito::mock("GET", function_path("f2").as_str())
        .with_status(500)
        .with_body("boom")
        .create();
    let list = mockito::mock("GET", FUNCTIONS_PATH).expect(0).create();

    let auth = TestAuth {};
    let client = Client::new(Box::new(&auth), mockito::server_url().as_str())
        .unwrap()
        .with_lookup_fallback(false);

    assert_eq!(client.get_function("f1").await.unwrap(), None);
    let res = client.get_function("f2").await;
    assert!(matches!(res, Err(Error::UnexpectedStatus { status: 500, .. })));
    list.assert();
}

#[tokio::test]
async fn test_describe_function_partial_failure() {
    let _direct = mockito::mock("GET", function_path("f1").as_str())
        .with_status(200)
        .with_body(serde_json::to_string(&function("f1")).unwrap())
        .create();
    let metrics = vec![ExecutionMetric {
        time_bucket: "2024-05-01 10:00:00".into(),
        count: 7,
    }];
    let _metrics = mockito::mock("GET", function_metrics_path("f1").as_str())
        .with_status(200)
        .with_body(serde_json::to_string(&metrics).unwrap())
        .create();
    let _logs = mockito::mock("GET", function_logs_path("f1").as_str())
        .with_status(500)
        .create();

    let auth = TestAuth {};
    let client = Client::new(Box::new(&auth), mockito::server_url().as_str()).unwrap();
    let view = client.describe_function("f1", Duration::from_secs(2)).await;

    assert_eq!(view.function.value(), Some(&function("f1")));
    assert_eq!(view.metrics.value(), Some(&metrics));
    assert_eq!(view.logs.error(), Some(&ProbeError::Status(500)));
}

#[tokio::test]
async fn test_describe_missing_function() {
    let _direct = mockito::mock("GET", function_path("ghost").as_str())
        .with_status(404)
        .create();
    let _list = mockito::mock("GET", FUNCTIONS_PATH)
        .with_status(200)
        .with_body("[]")
        .create();

    let auth = TestAuth {};
    let client = Client::new(Box::new(&auth), mockito::server_url().as_str()).unwrap();
    let view = client.describe_function("ghost", Duration::from_secs(2)).await;
    assert_eq!(view.function.error(), Some(&ProbeError::Status(404)));
}
