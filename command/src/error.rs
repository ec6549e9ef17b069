/// Warning printed when a token would travel over an unencrypted connection
pub(crate) const PLAIN_CREDENTIALS_WARN: &str =
    "WARNING! You are sending a token over an unencrypted connection to the gateway, consider using HTTPS.";

/// check_plain_credentials returns a warning message if a token is sent to a remote gateway without https.
/// Loopback gateways are exempt
pub(crate) fn check_plain_credentials(gateway: &str, has_token: bool) -> String {
    let mut res = String::new();
    if has_token
        && !gateway.starts_with("https")
        && !gateway.starts_with("http://127.0.0.1")
        && !gateway.starts_with("http://localhost")
    {
        res = PLAIN_CREDENTIALS_WARN.to_string();
    }
    res
}
