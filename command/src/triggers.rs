use crate::faas::Settings;
use crate::render::render_triggers;
use crate::{CommandAppend, CommandDispatch, State};
use async_trait::async_trait;
use clap::{App, ArgMatches, SubCommand};

pub(crate) struct Triggers;

impl CommandAppend for Triggers {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("triggers")
                .about("Lists the triggers in the order the registry resolves them")
                .arg_from_usage("-q ,--quiet 'Quiet mode - print out only the trigger's name'"),
        );
        app
    }
}

#[async_trait(?Send)]
impl CommandDispatch for Triggers {
    #[inline(always)]
    async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(t_args) = args.subcommand_matches("triggers") {
            let quiet = t_args.is_present("quiet");

            let settings = Settings::from_args(t_args)?;
            let auth = settings.auth();
            let client = settings.client(&auth)?;

            // registry order, the first of two identical triggers wins
            let triggers = client.list_triggers().await?;
            if quiet {
                for trigger in &triggers {
                    println!("{}", trigger.name)
                }
            } else {
                print!("{}", render_triggers(&triggers));
            }
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}
