use crate::faas::Settings;
use crate::render::render_functions;
use crate::{CommandAppend, CommandDispatch, State};
use async_trait::async_trait;
use clap::{App, ArgMatches, SubCommand};

pub(crate) struct List;

impl CommandAppend for List {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("list")
                .about("Lists the functions known to the registry")
                .args_from_usage(
                    "-v ,--verbose 'Verbose output for the function list'
            -q ,--quiet              'Quiet mode - print out only the function's name'
            ",
                ),
        );
        app
    }
}

#[async_trait(?Send)]
impl CommandDispatch for List {
    #[inline(always)]
    async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(l_args) = args.subcommand_matches("list") {
            let quiet = l_args.is_present("quiet");
            let verbose = l_args.is_present("verbose");

            let settings = Settings::from_args(l_args)?;
            let auth = settings.auth();
            let client = settings.client(&auth)?;

            let mut functions = client.list_functions().await?;
            functions.sort_by(|a, b| a.name.cmp(&b.name));

            if quiet {
                for function in &functions {
                    println!("{}", function.name)
                }
            } else {
                print!("{}", render_functions(&functions, verbose));
            }
            //return error in match to easy use ? to check next subcommand
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}
