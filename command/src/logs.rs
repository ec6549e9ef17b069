use crate::faas::Settings;
use crate::logs_format::{get_log_formatter, PLAIN_LOG_FORMAT};
use crate::{CommandAppend, CommandDispatch, State};
use async_trait::async_trait;
use clap::{App, Arg, ArgMatches, SubCommand};
use utility::telemetry::LogEntry;

pub(crate) struct Logs;

impl CommandAppend for Logs {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("logs")
                .about(r#"Fetch recent logs of all functions or of one function in plain text, key value or JSON format.
	Example:   fluor logs
  fluor logs FN
  fluor logs FN --output=json
  fluor logs FN --lines=5"#)
                .arg(
                    Arg::with_name("lines")
                        .long("lines")
                        .default_value("-1")
                        .takes_value(true)
                        .help("number of most recent log lines to display. Defaults to -1, unlimited if <=0"),
                )
                .args_from_usage(
                    "[NAME] 'function name, all functions when omitted'
             -o ,--output [output]              'output logs as (plain|keyvalue|json), JSON includes all available keys'
            --name                              'print the function name'
            --trace                             'print the trace id'
            ",
                ),
        );
        app
    }
}

#[async_trait(?Send)]
impl CommandDispatch for Logs {
    #[inline(always)]
    async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(l_args) = args.subcommand_matches("logs") {
            let function_name = l_args.value_of("NAME");
            let output_format = l_args.value_of("output").unwrap_or(PLAIN_LOG_FORMAT);
            // name only by default when several functions are mixed
            let include_name = l_args.is_present("name") || function_name.is_none();
            let include_trace = l_args.is_present("trace");
            let lines = l_args.value_of("lines").unwrap_or("-1");
            let lines: isize = lines
                .parse()
                .map_err(|_e| State::Custom(format!("can't parse {} as integer value", lines)))?;

            let settings = Settings::from_args(l_args)?;
            let auth = settings.auth();
            let client = settings.client(&auth)?;

            let log_events = client.get_logs(function_name).await?;
            let formatter = get_log_formatter(output_format);
            for log_msg in last_lines(&log_events, lines) {
                println!("{}", formatter(log_msg, include_name, include_trace)?);
            }
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

/// keeps the `lines` most recent entries, everything when lines <= 0.
/// The telemetry store answers newest first
fn last_lines(entries: &[LogEntry], lines: isize) -> &[LogEntry] {
    if lines <= 0 || lines as usize >= entries.len() {
        entries
    } else {
        &entries[..lines as usize]
    }
}
