use crate::faas::Settings;
use crate::{CommandAppend, CommandDispatch, State};
use async_trait::async_trait;
use bytes::Bytes;
use clap::{App, ArgMatches, SubCommand};
use proxy::invoke::carries_body;
use reqwest::Method;
use std::io::{Read, Write};
use utility::Error;

pub(crate) struct Invoke;

impl CommandAppend for Invoke {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("invoke")
                .about(r#"Invokes the function bound to a trigger and reads from STDIN for the body of the request
	Example:   fluor invoke GET /hello
  fluor invoke POST /orders --content-type application/json < order.json
  fluor invoke PUT /images --gateway https://host:port < image.png"#)
                .args_from_usage(
                    "
                          <METHOD> 'HTTP method of the trigger, matched case-sensitively'
                          <PATH>   'path of the trigger, matched literally'
                          --content-type [content-type] 'the content-type HTTP header such as application/json'
            ",
                ),
        );
        app
    }
}

#[async_trait(?Send)]
impl CommandDispatch for Invoke {
    #[inline(always)]
    async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(i_args) = args.subcommand_matches("invoke") {
            let method = i_args.value_of("METHOD").ok_or_else(|| {
                State::Custom("you must set the trigger method METHOD".to_string())
            })?;
            let path = i_args
                .value_of("PATH")
                .ok_or_else(|| State::Custom("you must set the trigger path PATH".to_string()))?;
            let content_type = i_args.value_of("content-type");

            let settings = Settings::from_args(i_args)?;
            let auth = settings.auth();
            let client = settings.client(&auth)?;

            let body = if read_body(method) {
                let mut function_input = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut function_input)
                    .map_err(|e| State::Custom(format!("unable to read standard input: {}", e)))?;
                Bytes::from(function_input)
            } else {
                Bytes::new()
            };

            let invocation = tokio::select! {
                res = client.call(method, path, body, content_type) => res?,
                _ = tokio::signal::ctrl_c() => {
                    return Err(State::Custom("invocation cancelled".to_string()));
                }
            };

            let response = invocation.response;
            std::io::stdout()
                .write_all(response.body.as_ref())
                .and_then(|_| std::io::stdout().flush())
                .map_err(Error::Io)?;

            if !response.is_success() {
                eprintln!(
                    "Server returned unexpected status code: {} from function {}",
                    response.status, invocation.function.name
                );
            }
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

/// stdin is only read for methods that forward a body, an unparsable method is left to the registry lookup
fn read_body(method: &str) -> bool {
    Method::from_bytes(method.as_bytes())
        .map(|m| carries_body(&m))
        .unwrap_or(false)
}
