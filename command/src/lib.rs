use crate::cmds::{build_cli, run};
use clap::{App, ArgMatches};

use utility::Error;

pub mod cmds;
pub(crate) mod describe;
pub(crate) mod error;
pub(crate) mod faas;
pub(crate) mod function;
pub(crate) mod invoke;
pub(crate) mod list;
pub(crate) mod logs;
pub mod logs_format;
pub(crate) mod priority;
pub(crate) mod remove;
pub mod render;
pub(crate) mod status;
pub(crate) mod trigger;
pub(crate) mod triggers;

type Result = std::result::Result<(), State>;

#[derive(thiserror::Error, Debug)]
pub enum State {
    #[error("command matched")]
    Matched,
    #[error("{0}")]
    Custom(String),
    #[error("{0}")]
    Error(#[from] Error),
}

/// exec parses the command line and runs the matched subcommand.
/// Failures are reported on stderr and end the process with status 1
pub async fn exec() {
    let app = build_cli();
    let args: ArgMatches = app.get_matches();
    if let Err(err) = run(&args).await {
        eprintln!("{}", err.to_string());
        std::process::exit(1);
    }
}

pub(crate) trait CommandAppend {
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static>;
}
pub(crate) trait SubCommandAppend {
    fn append_subcommand() -> App<'static, 'static>;
}

use async_trait::async_trait;

/// CommandDispatch runs the subcommand when it matched.
/// Returns Err(State::Matched) once it ran so the `?` chain stops at the first match
#[async_trait(?Send)]
pub(crate) trait CommandDispatch {
    async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result;
}
