use crate::client::Client;
use crate::route::resolve_route;
use crate::utils::create_invocation_endpoint;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use std::time::Instant;
use tracing::{info, instrument, warn};
use utility::model::{Function, Trigger};
use utility::{Error, Result};

/// RawResponse is the function's answer exactly as the runtime sent it
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Invocation is one request routed through a trigger to its function and back
#[derive(Debug, Clone)]
pub struct Invocation {
    pub trigger: Trigger,
    pub function: Function,
    pub response: RawResponse,
}

/// carries_body reports whether a request with this method forwards the caller's body.
/// GET and HEAD are reads and never do.
pub fn carries_body(method: &Method) -> bool {
    *method != Method::GET && *method != Method::HEAD
}

impl<'s> Client<'s> {
    /// invoke_function forwards one invocation to the runtime under `/function{trigger.path}`.
    ///
    /// The response is relayed untouched, whatever its status. Only a failure to reach the
    /// runtime or to read its answer is an error. Nothing is retried and the gateway
    /// credentials are not passed on to the function.
    #[instrument(skip(self, trigger, function, body), fields(trigger = %trigger.name, function = %function.name))]
    pub async fn invoke_function(
        &self,
        trigger: &Trigger,
        function: &Function,
        body: Bytes,
        content_type: Option<&str>,
    ) -> Result<RawResponse> {
        let method = Method::from_bytes(trigger.method.as_bytes()).map_err(|_e| {
            Error::Custom(format!(
                "invalid method {} on trigger {}",
                trigger.method, trigger.name
            ))
        })?;
        let url = create_invocation_endpoint(&self.gateway, trigger.path.as_str())?;

        let mut req = self.http_client.request(method.clone(), url);
        if carries_body(&method) {
            if let Some(content_type) = content_type {
                req = req.header(CONTENT_TYPE, content_type);
            }
            req = req.body(body);
        }
        let req = req.build()?;

        let start = Instant::now();
        let res = self.http_client.execute(req).await.map_err(|e| {
            warn!(error = %e, "function runtime unreachable");
            Error::UpstreamUnreachable(format!("{}: {}", self.gateway.as_str(), e))
        })?;

        let status = res.status().as_u16();
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let body = res.bytes().await.map_err(|e| {
            warn!(error = %e, "can't read function response");
            Error::UpstreamUnreachable(format!("{}: {}", self.gateway.as_str(), e))
        })?;

        info!(
            status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "function invoked"
        );
        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }

    /// call resolves method and path against the current trigger set, looks up the
    /// trigger's function and forwards the invocation.
    pub async fn call(
        &self,
        method: &str,
        path: &str,
        body: Bytes,
        content_type: Option<&str>,
    ) -> Result<Invocation> {
        let triggers = self.list_triggers().await?;
        let trigger = resolve_route(&triggers, method, path)?.clone();

        let function = match self.get_function(trigger.function_name.as_str()).await? {
            Some(function) => function,
            None => {
                warn!(
                    trigger = %trigger.name,
                    function = %trigger.function_name,
                    "trigger points to missing function"
                );
                return Err(Error::RegistryInconsistency {
                    trigger: trigger.name,
                    function: trigger.function_name,
                });
            }
        };

        let response = self
            .invoke_function(&trigger, &function, body, content_type)
            .await?;
        Ok(Invocation {
            trigger,
            function,
            response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carries_body() {
        struct TestCase {
            method: Method,
            expected: bool,
        }
        let cases = vec![
            TestCase {
                method: Method::GET,
                expected: false,
            },
            TestCase {
                method: Method::HEAD,
                expected: false,
            },
            TestCase {
                method: Method::POST,
                expected: true,
            },
            TestCase {
                method: Method::PUT,
                expected: true,
            },
            TestCase {
                method: Method::PATCH,
                expected: true,
            },
            TestCase {
                method: Method::DELETE,
                expected: true,
            },
        ];
        for case in cases {
            assert_eq!(carries_body(&case.method), case.expected, "{}", case.method);
        }
    }

    #[test]
    fn test_raw_response_is_success() {
        let res = RawResponse {
            status: 204,
            content_type: None,
            body: Bytes::new(),
        };
        assert!(res.is_success());
        let res = RawResponse { status: 500, ..res };
        assert!(!res.is_success());
    }
}
