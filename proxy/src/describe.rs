use crate::client::Client;
use crate::probe::{probe, ProbeResult};
use crate::utils::function_path;
use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use utility::model::Function;
use utility::telemetry::{ExecutionMetric, LogEntry};
use utility::{Error, Result};

/// FunctionView is everything known about one function, each part fetched independently
#[derive(Serialize, Debug, Clone)]
pub struct FunctionView {
    pub checked_at: DateTime<Utc>,
    pub function: ProbeResult<Function>,
    pub metrics: ProbeResult<Vec<ExecutionMetric>>,
    pub logs: ProbeResult<Vec<LogEntry>>,
}

impl<'s> Client<'s> {
    /// get_function looks a function up by name.
    ///
    /// The lookup-by-name endpoint is authoritative. When it answers with anything
    /// but success or 401 and lookup_fallback is set, the full list is scanned instead.
    pub async fn get_function(&self, function_name: &str) -> Result<Option<Function>> {
        let req = self
            .new_request(Method::GET, function_path(function_name).as_str())?
            .build()?;
        let res = self.do_request(req).await?;

        match res.status() {
            status if status.is_success() => {
                let body = res.text().await?;
                let function: Function = serde_json::from_str(body.as_str())?;
                Ok(Some(function))
            }
            StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
            status if self.lookup_fallback => {
                debug!(
                    function = function_name,
                    status = status.as_u16(),
                    "lookup by name failed, scanning the function list"
                );
                let functions = self.list_functions().await?;
                Ok(functions.into_iter().find(|f| f.name == function_name))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => {
                let body = res.text().await.unwrap_or_default();
                Err(Error::UnexpectedStatus {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    /// require_function is get_function with a missing function turned into NotFound
    pub async fn require_function(&self, function_name: &str) -> Result<Function> {
        self.get_function(function_name)
            .await?
            .ok_or_else(|| Error::NotFound(format!("function {}", function_name)))
    }

    /// describe_function fetches the function record, its metrics and its logs concurrently.
    /// A failing part leaves the other parts intact.
    pub async fn describe_function(&self, function_name: &str, probe_timeout: Duration) -> FunctionView {
        let (function, metrics, logs) = tokio::join!(
            probe(
                "function",
                probe_timeout,
                self.require_function(function_name)
            ),
            probe(
                "function_metrics",
                probe_timeout,
                self.get_function_metrics(function_name)
            ),
            probe(
                "function_logs",
                probe_timeout,
                self.get_logs(Some(function_name))
            ),
        );

        FunctionView {
            checked_at: Utc::now(),
            function,
            metrics,
            logs,
        }
    }
}
