use serde::{Deserialize, Serialize};

/// HEALTHY_STATUS is the sentinel the liveness function reports when the runtime is healthy
pub const HEALTHY_STATUS: &str = "ok";

/// ExecutionMetric is the number of invocations in one time bucket
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ExecutionMetric {
    pub time_bucket: String, //`json:"time_bucket"`
    pub count: u64,          //`json:"count"`
}

/// LogEntry is one log line emitted by a function
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: String, //`json:"timestamp"`
    #[serde(default)]
    pub level: String, //`json:"level"`
    #[serde(default)]
    pub body: String, //`json:"body"`
    #[serde(default)]
    pub trace_id: String, //`json:"trace_id"`
    #[serde(default)]
    pub function_name: String, //`json:"function_name"`
}

/// HealthReport is the payload of the liveness function
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct HealthReport {
    pub status: String, //`json:"status"`
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY_STATUS
    }
}
