use crate::faas::Settings;
use crate::render::render_function_view;
use crate::{CommandAppend, CommandDispatch, State};
use async_trait::async_trait;
use clap::{App, ArgMatches, SubCommand};

pub(crate) struct Describe;

impl CommandAppend for Describe {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("describe")
                .about("Display the details, executions and recent logs of a function")
                .args_from_usage(
                    "<NAME> 'name of the function'
                    -o ,--output [output] 'output as text or json'
            ",
                ),
        );
        app
    }
}

#[async_trait(?Send)]
impl CommandDispatch for Describe {
    #[inline(always)]
    async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(d_args) = args.subcommand_matches("describe") {
            let function_name = d_args.value_of("NAME").ok_or_else(|| {
                State::Custom("you must set the function name NAME".to_string())
            })?;
            let output = d_args.value_of("output").unwrap_or("text");

            let settings = Settings::from_args(d_args)?;
            let auth = settings.auth();
            let client = settings.client(&auth)?;

            let view = client
                .describe_function(function_name, settings.config.probe_timeout())
                .await;
            if output == "json" {
                println!("{}", serde_json::to_string(&view).map_err(utility::Error::Json)?);
            } else {
                colour::green!("{}", render_function_view(function_name, &view));
            }
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}
