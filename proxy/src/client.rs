use crate::proxy::make_http_client;
use reqwest::{Method, StatusCode, Url};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use utility::{Error, Result};

///an API client for the function registry, telemetry and runtime
pub struct Client<'s> {
    pub(crate) http_client: reqwest::Client,
    ///ClientAuth a type implementing ClientAuth interface for client authentication
    pub client_auth: Box<&'s dyn ClientAuth>,
    ///Gateway base url of the registry and function runtime
    pub gateway: Url,
    ///scan the function list when the lookup-by-name endpoint fails
    pub lookup_fallback: bool,
}

///ClientAuth an interface for client authentication.
// to add authentication to the client implement this interface
pub trait ClientAuth: Sync {
    fn set(&self, req: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder>;
}

impl<'s> Client<'s> {
    /// initializes a new API client
    pub fn new(auth: Box<&'s dyn ClientAuth>, gateway: &str) -> Result<Client<'s>> {
        let url = gateway.trim_end_matches('/');
        let url = Url::parse(url).map_err(|e| Error::Custom(format!("invalid gateway {}: {}", gateway, e)))?;

        Ok(Client {
            http_client: reqwest::Client::new(),
            client_auth: auth,
            gateway: url,
            lookup_fallback: true,
        })
    }

    ///replaces the HTTP client with one bounded by the given timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Result<Client<'s>> {
        self.http_client = make_http_client(timeout)?;
        Ok(self)
    }

    pub fn with_lookup_fallback(mut self, lookup_fallback: bool) -> Client<'s> {
        self.lookup_fallback = lookup_fallback;
        self
    }

    ///create a new HTTP request with authentication, the path is appended to the gateway path
    pub fn new_request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder> {
        // keep any base path of the gateway url and append the supplied path to it
        let mut endpoint = self.gateway.clone();
        let base = endpoint.path().trim_end_matches('/').to_string();
        endpoint.set_path(format!("{}/{}", base, path.trim_start_matches('/')).as_str());

        let req = self.http_client.request(method, endpoint);
        self.client_auth.set(req)
    }

    ///perform an HTTP request
    pub(crate) async fn do_request(&self, req: reqwest::Request) -> Result<reqwest::Response> {
        debug!(method = %req.method(), url = %req.url(), "sending request");
        let resp = self.http_client.execute(req).await?;
        Ok(resp)
    }

    ///GET the path and decode the JSON body of a successful response
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let req = self.new_request(Method::GET, path)?.build()?;
        let res = self.do_request(req).await?;
        let res = check_status(res).await?;
        let body = res.text().await?;
        let value = serde_json::from_str(body.as_str())?;
        Ok(value)
    }

    ///send the value as a JSON body and decode the JSON answer of a successful response
    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, value: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(value)?;
        let req = self
            .new_request(method, path)?
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .build()?;
        let res = self.do_request(req).await?;
        let res = check_status(res).await?;
        let body = res.text().await?;
        let value = serde_json::from_str(body.as_str())?;
        Ok(value)
    }

    ///DELETE the path, any non-success status is an error
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let req = self.new_request(Method::DELETE, path)?.build()?;
        let res = self.do_request(req).await?;
        check_status(res).await?;
        Ok(())
    }
}

///passes successful responses through and turns the others into errors
pub(crate) async fn check_status(res: reqwest::Response) -> Result<reqwest::Response> {
    match res.status() {
        status if status.is_success() => Ok(res),
        StatusCode::UNAUTHORIZED => Err(Error::Unauthorized),
        status => {
            let body = res.text().await.unwrap_or_default();
            Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                body,
            })
        }
    }
}
