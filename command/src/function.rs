use crate::faas::Settings;
use crate::{CommandAppend, CommandDispatch, State, SubCommandAppend};
use async_trait::async_trait;
use clap::{App, ArgMatches, SubCommand};
use utility::model::{Function, Language};
use utility::Error;

pub(crate) struct FunctionGroup;
pub(crate) struct FunctionCreate;
pub(crate) struct FunctionUpdate;

const FUNCTION_ARGS: &str = "<NAME> 'name of the function'
                   -l, --language [language]  'python, rust or go'
                   --cpu [cpu]                'cpu request such as 100m'
                   --memory [memory]          'memory request such as 128Mi'
                ";

impl CommandAppend for FunctionGroup {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("function")
                .about("Create or update functions in the registry, read only functions are refused")
                .subcommand(FunctionCreate::append_subcommand())
                .subcommand(FunctionUpdate::append_subcommand()),
        );
        app
    }
}

impl SubCommandAppend for FunctionCreate {
    #[inline(always)]
    fn append_subcommand() -> App<'static, 'static> {
        SubCommand::with_name("create")
            .about(r#"Registers a new function, the registry assigns its executable
	Example:   fluor function create hello --language rust --cpu 100m --memory 128Mi"#)
            .args_from_usage(FUNCTION_ARGS)
    }
}

impl SubCommandAppend for FunctionUpdate {
    #[inline(always)]
    fn append_subcommand() -> App<'static, 'static> {
        SubCommand::with_name("update")
            .about(r#"Replaces the language and resources of a function, unset flags keep their current value
	Example:   fluor function update hello --memory 256Mi"#)
            .args_from_usage(FUNCTION_ARGS)
    }
}

#[async_trait(?Send)]
impl CommandDispatch for FunctionGroup {
    #[inline(always)]
    async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(f_args) = args.subcommand_matches("function") {
            FunctionCreate::dispatch_command(f_args).await?;
            FunctionUpdate::dispatch_command(f_args).await?;

            Err(State::Custom(format!(
                "function command must be followed by a sub command\n{}\n\
                for example: fluor function create | update",
                f_args.usage()
            )))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl CommandDispatch for FunctionCreate {
    #[inline(always)]
    async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(c_args) = args.subcommand_matches("create") {
            let base = Function {
                name: required(c_args, "NAME")?.to_string(),
                ..Default::default()
            };
            let function = function_from_flags(c_args, base)?;

            let settings = Settings::from_args(c_args)?;
            let auth = settings.auth();
            let client = settings.client(&auth)?;

            let created = client.create_function(&function).await?;
            colour::green!("Created function: {}\n", created.name);
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl CommandDispatch for FunctionUpdate {
    #[inline(always)]
    async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(u_args) = args.subcommand_matches("update") {
            let name = required(u_args, "NAME")?;

            let settings = Settings::from_args(u_args)?;
            let auth = settings.auth();
            let client = settings.client(&auth)?;

            let current = client.require_function(name).await?;
            let function = function_from_flags(u_args, current)?;
            let updated = client.update_function(&function).await?;
            colour::green!("Updated function: {}\n", updated.name);
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

fn required<'a>(args: &'a ArgMatches<'_>, name: &str) -> Result<&'a str, State> {
    args.value_of(name)
        .ok_or_else(|| State::Custom(format!("you must set {}", name)))
}

/// function_from_flags overrides the fields of base with the flags that were set
pub(crate) fn function_from_flags(args: &ArgMatches<'_>, base: Function) -> utility::Result<Function> {
    let mut function = base;
    if let Some(language) = args.value_of("language") {
        function.language = parse_language(language)?;
    }
    if let Some(cpu) = args.value_of("cpu") {
        function.cpu = cpu.to_string();
    }
    if let Some(memory) = args.value_of("memory") {
        function.memory = memory.to_string();
    }
    Ok(function)
}

pub(crate) fn parse_language(language: &str) -> utility::Result<Language> {
    match language {
        "python" => Ok(Language::Python),
        "rust" => Ok(Language::Rust),
        "go" => Ok(Language::Go),
        other => Err(Error::Custom(format!(
            "unknown language {}, use python, rust or go",
            other
        ))),
    }
}
