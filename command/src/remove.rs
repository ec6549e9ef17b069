use crate::faas::Settings;
use crate::{CommandAppend, CommandDispatch, State};
use async_trait::async_trait;
use clap::{App, ArgMatches, SubCommand};

pub(crate) struct Remove;

impl CommandAppend for Remove {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("remove")
                .alias("rm")
                .about(r#"Removes a function or, with --trigger, a trigger from the registry.
Read only entries are refused
	Example:   fluor remove hello
  fluor remove t-hello --trigger"#)
                .args_from_usage(
                    "<NAME> 'name of the function or trigger'
                    --trigger 'remove the trigger with this name instead of a function'
            ",
                ),
        );
        app
    }
}

#[async_trait(?Send)]
impl CommandDispatch for Remove {
    #[inline(always)]
    async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(r_args) = args.subcommand_matches("remove") {
            let name = r_args
                .value_of("NAME")
                .ok_or_else(|| State::Custom("you must set the name NAME".to_string()))?;
            let trigger = r_args.is_present("trigger");

            let settings = Settings::from_args(r_args)?;
            let auth = settings.auth();
            let client = settings.client(&auth)?;

            if trigger {
                client.delete_trigger(name).await?;
                colour::green!("Removed trigger: {}\n", name);
            } else {
                client.delete_function(name).await?;
                colour::green!("Removed function: {}\n", name);
            }
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}
