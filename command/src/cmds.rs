use crate::describe::Describe;
use crate::faas::Fluor;
use crate::function::FunctionGroup;
use crate::invoke::Invoke;
use crate::list::List;
use crate::logs::Logs;
use crate::remove::Remove;
use crate::status::Status;
use crate::trigger::TriggerGroup;
use crate::triggers::Triggers;
use crate::{CommandAppend, CommandDispatch, State};
use clap::{App, AppSettings, ArgMatches};
use utility::{Error, Result};

const WELCOME_MSG: &str = r#"  __ _
 / _| |_   _  ___  _ __
| |_| | | | |/ _ \| '__|
|  _| | |_| | (_) | |
|_| |_|\__,_|\___/|_|


Invoke functions through their triggers and watch the platform from the command line"#;

pub fn build_cli() -> App<'static, 'static> {
    let app = App::new("fluor")
        .version(env!("CARGO_PKG_VERSION"))
        .setting(AppSettings::VersionlessSubcommands)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::ColoredHelp)
        .setting(AppSettings::DeriveDisplayOrder)
        .global_settings(&[AppSettings::ColoredHelp])
        .about(WELCOME_MSG);

    let app = Fluor::append_subcommand(app);
    let app = Invoke::append_subcommand(app);
    let app = Status::append_subcommand(app);
    let app = List::append_subcommand(app);
    let app = Triggers::append_subcommand(app);
    let app = Describe::append_subcommand(app);
    let app = Logs::append_subcommand(app);
    let app = Remove::append_subcommand(app);
    let app = FunctionGroup::append_subcommand(app);
    let app = TriggerGroup::append_subcommand(app);
    app
}

pub async fn run(args: &ArgMatches<'_>) -> Result<()> {
    match dispatch_command(args).await {
        Ok(_) => Err(Error::Custom(
            "command not matched please contact the development team".to_string(),
        )),
        Err(s) => match s {
            State::Matched => Ok(()),
            State::Error(e) => Err(e),
            state => Err(Error::Custom(state.to_string())),
        },
    }
}

pub async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
    Invoke::dispatch_command(args).await?;
    Status::dispatch_command(args).await?;
    List::dispatch_command(args).await?;
    Triggers::dispatch_command(args).await?;
    Describe::dispatch_command(args).await?;
    Logs::dispatch_command(args).await?;
    Remove::dispatch_command(args).await?;
    FunctionGroup::dispatch_command(args).await?;
    TriggerGroup::dispatch_command(args).await
}
