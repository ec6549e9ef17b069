use crate::client::Client;
use crate::utils::{function_metrics_path, HEALTH_PATH, OVERALL_METRICS_PATH};
use utility::telemetry::{ExecutionMetric, HealthReport};
use utility::Result;

impl<'s> Client<'s> {
    /// get_overall_metrics returns invocation counts of all functions per time bucket
    pub async fn get_overall_metrics(&self) -> Result<Vec<ExecutionMetric>> {
        self.get_json(OVERALL_METRICS_PATH).await
    }

    /// get_function_metrics returns invocation counts of one function per time bucket
    pub async fn get_function_metrics(&self, function_name: &str) -> Result<Vec<ExecutionMetric>> {
        self.get_json(function_metrics_path(function_name).as_str())
            .await
    }

    /// get_health asks the liveness function how the runtime is doing
    pub async fn get_health(&self) -> Result<HealthReport> {
        self.get_json(HEALTH_PATH).await
    }
}
