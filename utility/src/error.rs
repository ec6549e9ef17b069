use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("{0}")]
    Parse(#[from] url::ParseError),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    ///no trigger matches the requested method and path
    #[error("no trigger matches {method} {path}")]
    RouteNotFound { method: String, path: String },
    ///the gateway could not reach the function runtime
    #[error("cannot reach the function runtime: {0}")]
    UpstreamUnreachable(String),
    ///a trigger names a function the registry does not know
    #[error("trigger {trigger} points to missing function {function}")]
    RegistryInconsistency { trigger: String, function: String },
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0} is read-only and can't be modified")]
    ReadOnly(String),
    #[error("unauthorized access, pass a token with --token or set one in the config file")]
    Unauthorized,
    #[error("server returned unexpected status code {status} and body {body}")]
    UnexpectedStatus { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, crate::Error>;
