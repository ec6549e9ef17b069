use proxy::auth::ClientAuthE;
use proxy::client::*;
use utility::Result;

#[derive(Clone)]
struct TestAuth;

impl ClientAuth for TestAuth {
    fn set(&self, req: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder> {
        Ok(req)
    }
}

#[test]
fn test_new_client() {
    let auth = TestAuth {};
    struct TestCase {
        _name: &'static str,
        input: &'static str,
        output: &'static str,
    }

    let cases = vec![
        TestCase {
            _name: "Without trailing slash",
            input: "http://127.0.0.1:8080",
            output: "http://127.0.0.1:8080/",
        },
        TestCase {
            _name: "With trailing slash",
            input: "http://127.0.0.1:8080/",
            output: "http://127.0.0.1:8080/",
        },
        TestCase {
            _name: "With base path",
            input: "http://127.0.0.1:8080/api/",
            output: "http://127.0.0.1:8080/api",
        },
    ];

    for test in cases {
        let auth = auth.clone();
        let res = Client::new(Box::new(&auth), test.input);
        assert!(res.is_ok());
        let client = res.unwrap();
        let url = client.gateway.to_string();
        assert_eq!(test.output, url);
        assert!(client.lookup_fallback);
    }
}

#[test]
fn test_new_client_bad_gateway() {
    let auth = TestAuth {};
    let res = Client::new(Box::new(&auth), "not a url");
    assert!(res.is_err());
    assert!(format!("{}", res.err().unwrap()).contains("invalid gateway"));
}

#[test]
fn test_new_request_url() {
    let auth = TestAuth {};

    struct TestCase {
        _name: &'static str,
        gateway: &'static str,
        path: &'static str,
        expected_url: &'static str,
    }
    let cases = vec![
        TestCase {
            _name: "A valid path",
            gateway: "http://127.0.0.1:8080",
            path: "/functions",
            expected_url: "http://127.0.0.1:8080/functions",
        },
        TestCase {
            _name: "gateway with base path",
            gateway: "http://127.0.0.1:8080/base/path",
            path: "/functions/f1",
            expected_url: "http://127.0.0.1:8080/base/path/functions/f1",
        },
        TestCase {
            _name: "path without starting slash",
            gateway: "http://127.0.0.1:8080/base/path/",
            path: "triggers",
            expected_url: "http://127.0.0.1:8080/base/path/triggers",
        },
    ];

    for test in cases {
        let client = Client::new(Box::new(&auth), test.gateway).unwrap();
        let req = client.new_request(reqwest::Method::GET, test.path);
        assert!(req.is_ok());
        let req = req.unwrap().build();
        assert!(req.is_ok());
        let req = req.unwrap();
        assert_eq!(req.url().as_str(), test.expected_url, "{}", test._name)
    }
}

#[test]
fn test_bearer_token_is_set() {
    let auth = ClientAuthE::new("secret-token");
    let client = auth.get_client("http://127.0.0.1:8080").unwrap();
    let req = client
        .new_request(reqwest::Method::GET, "/functions")
        .unwrap()
        .build()
        .unwrap();
    let header = req.headers().get("authorization").unwrap();
    assert_eq!(header.to_str().unwrap(), "Bearer secret-token");
}

#[test]
fn test_anonymous_has_no_authorization() {
    let auth = ClientAuthE::new("");
    let client = auth.get_client("http://127.0.0.1:8080").unwrap();
    let req = client
        .new_request(reqwest::Method::GET, "/functions")
        .unwrap()
        .build()
        .unwrap();
    assert!(req.headers().get("authorization").is_none());
}
