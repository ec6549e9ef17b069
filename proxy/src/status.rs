use crate::client::Client;
use crate::probe::{probe, ProbeError, ProbeResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::info;
use utility::telemetry::{ExecutionMetric, HealthReport, LogEntry};

/// SystemStatus is the health of the platform as seen by the liveness probe
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    Operational,
    Degraded,
    Down,
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SystemStatus::Operational => "Operational",
            SystemStatus::Degraded => "Degraded",
            SystemStatus::Down => "Down",
        };
        f.write_str(s)
    }
}

/// derive_status decides the system status from the liveness probe alone.
///
/// An unreachable probe means Down. A reachable probe that can't be parsed or
/// that does not report the healthy sentinel means Degraded.
pub fn derive_status(liveness: &ProbeResult<HealthReport>) -> SystemStatus {
    match &liveness.result {
        Ok(report) if report.is_healthy() => SystemStatus::Operational,
        Ok(_) => SystemStatus::Degraded,
        Err(ProbeError::Parse(_)) => SystemStatus::Degraded,
        Err(ProbeError::Timeout) | Err(ProbeError::Connection(_)) | Err(ProbeError::Status(_)) => {
            SystemStatus::Down
        }
    }
}

/// StatusView is the merged outcome of one aggregation cycle
#[derive(Serialize, Debug, Clone)]
pub struct StatusView {
    pub status: SystemStatus,
    pub checked_at: DateTime<Utc>,
    pub liveness: ProbeResult<HealthReport>,
    pub functions: ProbeResult<usize>,
    pub triggers: ProbeResult<usize>,
    pub metrics: ProbeResult<Vec<ExecutionMetric>>,
    pub logs: ProbeResult<Vec<LogEntry>>,
}

impl<'s> Client<'s> {
    /// aggregate runs every probe concurrently, each bounded by probe_timeout, and merges
    /// whatever came back. It never fails: a failed probe only blanks its own field.
    pub async fn aggregate(&self, probe_timeout: Duration) -> StatusView {
        let (liveness, functions, triggers, metrics, logs) = tokio::join!(
            probe("liveness", probe_timeout, self.get_health()),
            probe("functions", probe_timeout, async {
                self.list_functions().await.map(|f| f.len())
            }),
            probe("triggers", probe_timeout, async {
                self.list_triggers().await.map(|t| t.len())
            }),
            probe("metrics", probe_timeout, self.get_overall_metrics()),
            probe("logs", probe_timeout, self.get_logs(None)),
        );

        let status = derive_status(&liveness);
        info!(%status, "aggregation cycle done");
        StatusView {
            status,
            checked_at: Utc::now(),
            liveness,
            functions,
            triggers,
            metrics,
            logs,
        }
    }
}
