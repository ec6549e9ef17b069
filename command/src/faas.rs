use crate::error::check_plain_credentials;
use crate::priority::{get_gateway_url, get_token, FLUOR_URL_ENVIRONMENT};
use crate::CommandAppend;
use clap::{App, Arg, ArgMatches};
use config::config_file::{ConfigFile, DEFAULT_GATEWAY};
use proxy::auth::ClientAuthE;
use proxy::client::Client;
use std::path::Path;
use tracing::debug;

pub(crate) struct Fluor;

impl CommandAppend for Fluor {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app
            .arg(
                Arg::with_name("gateway")
                    .long("gateway")
                    .short("g")
                    .default_value(DEFAULT_GATEWAY)
                    .takes_value(true)
                    .global(true)
                    .help("Gateway URL starting with http(s)://"),
            )
            .arg(
                Arg::with_name("token")
                    .long("token")
                    .short("k")
                    .takes_value(true)
                    .global(true)
                    .help("Pass a bearer token for the gateway"),
            )
            .arg(
                Arg::with_name("config")
                    .long("config")
                    .takes_value(true)
                    .global(true)
                    .help("Path to the config file, defaults to ~/.fluor/config.yml"),
            );
        app
    }
}

/// Settings are the values every subcommand needs, once flags, config file and environment are merged
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) gateway: String,
    pub(crate) token: String,
    pub(crate) config: ConfigFile,
}

impl Settings {
    /// from_args reads the global flags of the matched subcommand
    pub(crate) fn from_args(args: &ArgMatches<'_>) -> utility::Result<Settings> {
        let config = match args.value_of("config") {
            Some(path) => ConfigFile::load(Path::new(path))?,
            None => ConfigFile::load_default()?,
        };
        let gateway = args.value_of("gateway").unwrap_or(DEFAULT_GATEWAY);
        let env_url = std::env::var(FLUOR_URL_ENVIRONMENT).unwrap_or_default();
        let gateway = get_gateway_url(
            gateway,
            DEFAULT_GATEWAY,
            config.gateway.as_str(),
            env_url.as_str(),
        );
        let token = get_token(args.value_of("token").unwrap_or(""), config.token.as_str());

        let msg = check_plain_credentials(gateway.as_str(), !token.is_empty());
        if !msg.is_empty() {
            eprintln!("{}", msg);
        }
        debug!(gateway = gateway.as_str(), "settings resolved");

        Ok(Settings {
            gateway,
            token,
            config,
        })
    }

    pub(crate) fn auth(&self) -> ClientAuthE {
        ClientAuthE::new(self.token.as_str())
    }

    /// client builds the gateway client for the given auth with the configured limits
    pub(crate) fn client<'a>(&self, auth: &'a ClientAuthE) -> utility::Result<Client<'a>> {
        let client = auth
            .get_client(self.gateway.as_str())?
            .with_timeout(self.config.invoke_timeout())?
            .with_lookup_fallback(self.config.lookup_fallback);
        Ok(client)
    }
}
