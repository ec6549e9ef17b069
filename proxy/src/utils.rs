use reqwest::Url;
use utility::Result;

pub const FUNCTIONS_PATH: &str = "/functions";
pub const TRIGGERS_PATH: &str = "/triggers";
/// INVOKE_PREFIX is the namespace under which the runtime serves trigger paths
pub const INVOKE_PREFIX: &str = "/function";
pub const HEALTH_PATH: &str = "/function/healthz";
pub const OVERALL_METRICS_PATH: &str = "/telemetry/metrics/overall";
pub const LOGS_PATH: &str = "/telemetry/logs";
pub const FUNCTION_TELEMETRY_PATH: &str = "/telemetry/functions";

pub fn function_path(name: &str) -> String {
    format!("{}/{}", FUNCTIONS_PATH, name)
}

pub fn trigger_path(name: &str) -> String {
    format!("{}/{}", TRIGGERS_PATH, name)
}

pub fn function_logs_path(name: &str) -> String {
    format!("{}/{}/logs", FUNCTION_TELEMETRY_PATH, name)
}

pub fn function_metrics_path(name: &str) -> String {
    format!("{}/{}/metrics", FUNCTION_TELEMETRY_PATH, name)
}

/// create_invocation_endpoint appends the trigger path, untouched, to the invocation namespace
pub fn create_invocation_endpoint(gateway: &Url, trigger_path: &str) -> Result<Url> {
    let url = format!(
        "{}{}{}",
        gateway.as_str().trim_end_matches('/'),
        INVOKE_PREFIX,
        trigger_path
    );
    Ok(Url::parse(url.as_str())?)
}
