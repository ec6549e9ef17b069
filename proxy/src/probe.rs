use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::warn;
use utility::Error;

/// ProbeError is the reason a single probe produced no data
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ProbeError {
    #[error("timed out")]
    Timeout,
    #[error("connection error: {0}")]
    Connection(String),
    #[error("unexpected status code {0}")]
    Status(u16),
    #[error("can't parse response: {0}")]
    Parse(String),
}

impl From<Error> for ProbeError {
    fn from(err: Error) -> Self {
        match err {
            Error::Reqwest(e) if e.is_timeout() => ProbeError::Timeout,
            Error::Reqwest(e) if e.is_decode() => ProbeError::Parse(e.to_string()),
            Error::Json(e) => ProbeError::Parse(e.to_string()),
            Error::UnexpectedStatus { status, .. } => ProbeError::Status(status),
            Error::Unauthorized => ProbeError::Status(401),
            Error::NotFound(_) => ProbeError::Status(404),
            e => ProbeError::Connection(e.to_string()),
        }
    }
}

/// ProbeResult is the fully successful payload of a probe or the reason it failed
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult<T> {
    pub result: Result<T, ProbeError>,
    pub latency: Duration,
}

impl<T> ProbeResult<T> {
    pub fn value(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ProbeError> {
        self.result.as_ref().err()
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

impl<T: Serialize> Serialize for ProbeResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProbeResult", 3)?;
        state.serialize_field("value", &self.value())?;
        state.serialize_field("error", &self.error().map(|e| e.to_string()))?;
        state.serialize_field("latency_ms", &(self.latency.as_millis() as u64))?;
        state.end()
    }
}

/// probe awaits the future for at most the timeout and records how long it took
pub async fn probe<T, F>(name: &str, timeout: Duration, fut: F) -> ProbeResult<T>
where
    F: Future<Output = utility::Result<T>>,
{
    let start = Instant::now();
    let result = match tokio::time::timeout(timeout, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(ProbeError::from(e)),
        Err(_) => Err(ProbeError::Timeout),
    };
    if let Err(e) = &result {
        warn!(probe = name, error = %e, "probe failed");
    }
    ProbeResult {
        result,
        latency: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probe_success() {
        let res = probe("count", Duration::from_secs(1), async { Ok(3usize) }).await;
        assert_eq!(res.value(), Some(&3));
        assert!(res.error().is_none());
    }

    #[tokio::test]
    async fn test_probe_timeout() {
        let res: ProbeResult<usize> = probe("slow", Duration::from_millis(20), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(1)
        })
        .await;
        assert_eq!(res.error(), Some(&ProbeError::Timeout));
        assert!(res.value().is_none());
        assert!(res.latency < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_probe_error_classification() {
        struct TestCase {
            _name: &'static str,
            err: fn() -> Error,
            expected: ProbeError,
        }
        let cases = vec![
            TestCase {
                _name: "unexpected status",
                err: || Error::UnexpectedStatus {
                    status: 503,
                    body: "".into(),
                },
                expected: ProbeError::Status(503),
            },
            TestCase {
                _name: "unauthorized",
                err: || Error::Unauthorized,
                expected: ProbeError::Status(401),
            },
            TestCase {
                _name: "missing record",
                err: || Error::NotFound("function f1".into()),
                expected: ProbeError::Status(404),
            },
            TestCase {
                _name: "unreachable",
                err: || Error::Custom("refused".into()),
                expected: ProbeError::Connection("refused".into()),
            },
        ];

        for case in cases {
            let err = case.err;
            let res: ProbeResult<()> = probe("p", Duration::from_secs(1), async { Err(err()) }).await;
            assert_eq!(res.error(), Some(&case.expected), "{}", case._name);
        }
    }

    #[test]
    fn test_probe_error_from_json() {
        let err = serde_json::from_str::<Vec<u64>>("not json").unwrap_err();
        assert!(matches!(ProbeError::from(Error::Json(err)), ProbeError::Parse(_)));
    }

    #[test]
    fn test_probe_result_serialize() {
        let ok = ProbeResult {
            result: Ok(2usize),
            latency: Duration::from_millis(12),
        };
        let out = serde_json::to_value(&ok).unwrap();
        assert_eq!(out["value"], 2);
        assert!(out["error"].is_null());
        assert_eq!(out["latency_ms"], 12);

        let failed: ProbeResult<usize> = ProbeResult {
            result: Err(ProbeError::Timeout),
            latency: Duration::from_millis(3000),
        };
        let out = serde_json::to_value(&failed).unwrap();
        assert!(out["value"].is_null());
        assert_eq!(out["error"], "timed out");
    }
}
