use reqwest::Client;
use std::time::Duration;
use utility::Result;

//makes a HTTP client, bounded by the timeout when one is given
pub fn make_http_client(timeout: Option<Duration>) -> Result<Client> {
    let mut client = reqwest::ClientBuilder::new();

    if let Some(time) = timeout {
        client = client.timeout(time);
    }

    Ok(client.build()?)
}
