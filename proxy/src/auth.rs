use crate::client::{Client, ClientAuth};
use reqwest::RequestBuilder;
use utility::Result;

///bearer token issued by the platform's auth service
pub struct BearerToken {
    token: String,
}

///no credentials, requests are sent as is
pub struct Anonymous;

impl ClientAuth for BearerToken {
    fn set(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        Ok(req.bearer_auth(self.token.as_str()))
    }
}

impl ClientAuth for Anonymous {
    fn set(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        Ok(req)
    }
}

pub enum ClientAuthE {
    BearerToken(BearerToken),
    Anonymous(Anonymous),
}

impl ClientAuthE {
    ///returns the auth for the CLI, an empty token means anonymous access
    pub fn new(token: &str) -> ClientAuthE {
        if token.is_empty() {
            ClientAuthE::Anonymous(Anonymous)
        } else {
            ClientAuthE::BearerToken(BearerToken {
                token: token.to_string(),
            })
        }
    }

    pub fn get_client(&self, gateway: &str) -> Result<Client<'_>> {
        Client::new(Box::new(self as &dyn ClientAuth), gateway)
    }
}

impl ClientAuth for ClientAuthE {
    fn set(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        match self {
            ClientAuthE::BearerToken(t) => t.set(req),
            ClientAuthE::Anonymous(a) => a.set(req),
        }
    }
}
