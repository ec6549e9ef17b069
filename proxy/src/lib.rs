use crate::client::ClientAuth;

pub mod auth;
pub mod client;
pub mod delete;
pub mod deploy;
pub mod describe;
pub mod invoke;
pub mod list;
pub mod logs;
pub mod metrics;
pub mod probe;
pub mod proxy;
pub mod route;
pub mod status;
pub mod utils;

#[derive(Clone)]
pub struct TestAuth;

impl ClientAuth for TestAuth {
    fn set(&self, req: reqwest::RequestBuilder) -> utility::Result<reqwest::RequestBuilder> {
        Ok(req)
    }
}
