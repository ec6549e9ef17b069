use crate::faas::Settings;
use crate::{CommandAppend, CommandDispatch, State, SubCommandAppend};
use async_trait::async_trait;
use clap::{App, ArgMatches, SubCommand};
use utility::model::Trigger;

pub(crate) struct TriggerGroup;
pub(crate) struct TriggerCreate;
pub(crate) struct TriggerUpdate;

const TRIGGER_ARGS: &str = "<NAME>     'name of the trigger'
                   <METHOD>   'HTTP method, matched case-sensitively'
                   <PATH>     'path, matched literally'
                   <FUNCTION> 'name of the target function'
                ";

impl CommandAppend for TriggerGroup {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("trigger")
                .about("Create or update triggers in the registry, read only triggers are refused")
                .subcommand(TriggerCreate::append_subcommand())
                .subcommand(TriggerUpdate::append_subcommand()),
        );
        app
    }
}

impl SubCommandAppend for TriggerCreate {
    #[inline(always)]
    fn append_subcommand() -> App<'static, 'static> {
        SubCommand::with_name("create")
            .about(r#"Binds a method and path to a function
	Example:   fluor trigger create t-hello GET /hello hello"#)
            .args_from_usage(TRIGGER_ARGS)
    }
}

impl SubCommandAppend for TriggerUpdate {
    #[inline(always)]
    fn append_subcommand() -> App<'static, 'static> {
        SubCommand::with_name("update")
            .about(r#"Rebinds an existing trigger
	Example:   fluor trigger update t-hello POST /hello hello-v2"#)
            .args_from_usage(TRIGGER_ARGS)
    }
}

#[async_trait(?Send)]
impl CommandDispatch for TriggerGroup {
    #[inline(always)]
    async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(t_args) = args.subcommand_matches("trigger") {
            TriggerCreate::dispatch_command(t_args).await?;
            TriggerUpdate::dispatch_command(t_args).await?;

            Err(State::Custom(format!(
                "trigger command must be followed by a sub command\n{}\n\
                for example: fluor trigger create | update",
                t_args.usage()
            )))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl CommandDispatch for TriggerCreate {
    #[inline(always)]
    async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(c_args) = args.subcommand_matches("create") {
            let trigger = trigger_from_args(c_args)?;

            let settings = Settings::from_args(c_args)?;
            let auth = settings.auth();
            let client = settings.client(&auth)?;

            let created = client.create_trigger(&trigger).await?;
            colour::green!(
                "Created trigger: {} {} {} -> {}\n",
                created.name,
                created.method,
                created.path,
                created.function_name
            );
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl CommandDispatch for TriggerUpdate {
    #[inline(always)]
    async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(u_args) = args.subcommand_matches("update") {
            let trigger = trigger_from_args(u_args)?;

            let settings = Settings::from_args(u_args)?;
            let auth = settings.auth();
            let client = settings.client(&auth)?;

            let updated = client.update_trigger(&trigger).await?;
            colour::green!(
                "Updated trigger: {} {} {} -> {}\n",
                updated.name,
                updated.method,
                updated.path,
                updated.function_name
            );
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

pub(crate) fn trigger_from_args(args: &ArgMatches<'_>) -> Result<Trigger, State> {
    let value = |name: &str| {
        args.value_of(name)
            .map(|v| v.to_string())
            .ok_or_else(|| State::Custom(format!("you must set {}", name)))
    };
    Ok(Trigger {
        name: value("NAME")?,
        method: value("METHOD")?,
        path: value("PATH")?,
        function_name: value("FUNCTION")?,
        readonly: false,
    })
}
