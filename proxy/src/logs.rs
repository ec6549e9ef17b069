use crate::client::{check_status, Client};
use crate::utils::{function_logs_path, LOGS_PATH};
use reqwest::Method;
use utility::telemetry::LogEntry;
use utility::Result;

impl<'s> Client<'s> {
    ///returns the recent logs of every function, or of one function when a name is given
    pub async fn get_logs(&self, function_name: Option<&str>) -> Result<Vec<LogEntry>> {
        let path = match function_name {
            Some(name) => function_logs_path(name),
            None => LOGS_PATH.to_string(),
        };
        let req = self.new_request(Method::GET, path.as_str())?.build()?;
        let res = self.do_request(req).await?;
        let body = check_status(res).await?.text().await?;
        if body.trim().is_empty() {
            Ok(vec![])
        } else {
            let logs: Vec<LogEntry> = serde_json::from_str(body.as_str())?;
            Ok(logs)
        }
    }
}
