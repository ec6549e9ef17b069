use crate::faas::Settings;
use crate::render::render_status;
use crate::{CommandAppend, CommandDispatch, State};
use async_trait::async_trait;
use clap::{App, Arg, ArgMatches, SubCommand};
use proxy::client::Client;
use proxy::status::SystemStatus;
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use utility::Error;

pub(crate) struct Status;

impl CommandAppend for Status {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        let app = app.subcommand(
            SubCommand::with_name("status")
                .about(r#"Probes the runtime, registry and telemetry concurrently and prints the system status
	Example:   fluor status
  fluor status --output json --timeout 500ms
  fluor status --watch 10s"#)
                .arg_from_usage("-o ,--output [output] 'output as text or json'")
                .arg(
                    Arg::with_name("timeout")
                        .long("timeout")
                        .takes_value(true)
                        .help("per probe timeout like 3s or 500ms, defaults to probe_timeout_ms of the config file"),
                )
                .arg(
                    Arg::with_name("watch")
                        .long("watch")
                        .short("w")
                        .takes_value(true)
                        .min_values(0)
                        .help("refresh on an interval like 5s until Ctrl-C, defaults to refresh_interval_ms of the config file"),
                ),
        );
        app
    }
}

#[async_trait(?Send)]
impl CommandDispatch for Status {
    #[inline(always)]
    async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
        if let Some(s_args) = args.subcommand_matches("status") {
            let output = s_args.value_of("output").unwrap_or("text");
            let settings = Settings::from_args(s_args)?;
            let probe_timeout = match s_args.value_of("timeout") {
                Some(timeout) => parse_flag_duration("timeout", timeout)?,
                None => settings.config.probe_timeout(),
            };
            let watch = if s_args.is_present("watch") {
                match s_args.value_of("watch") {
                    Some(interval) => Some(parse_flag_duration("watch", interval)?),
                    None => Some(settings.config.refresh_interval()),
                }
            } else {
                None
            };

            let auth = settings.auth();
            let client = settings.client(&auth)?;

            match watch {
                None => print_status(&client, probe_timeout, output).await?,
                Some(interval) => {
                    let ctrl_c = async {
                        let _ = tokio::signal::ctrl_c().await;
                    };
                    run_every(interval, ctrl_c, || print_status(&client, probe_timeout, output))
                        .await?
                }
            }
            Err(State::Matched)
        } else {
            Ok(())
        }
    }
}

async fn print_status(
    client: &Client<'_>,
    probe_timeout: Duration,
    output: &str,
) -> utility::Result<()> {
    let view = client.aggregate(probe_timeout).await;
    if output == "json" {
        println!("{}", serde_json::to_string(&view)?);
    } else {
        let text = render_status(&view);
        match view.status {
            SystemStatus::Operational => colour::green!("{}", text),
            SystemStatus::Degraded => colour::yellow!("{}", text),
            SystemStatus::Down => colour::red!("{}", text),
        }
    }
    Ok(())
}

/// run_every runs cycle on the interval until stop completes, including while a cycle is running.
/// A late cycle delays the next tick instead of bursting
pub(crate) async fn run_every<S, F, Fut>(interval: Duration, stop: S, mut cycle: F) -> utility::Result<()>
where
    S: Future<Output = ()>,
    F: FnMut() -> Fut,
    Fut: Future<Output = utility::Result<()>>,
{
    tokio::pin!(stop);
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            _ = &mut stop => return Ok(()),
            _ = ticker.tick() => {}
        }
        tokio::select! {
            _ = &mut stop => return Ok(()),
            res = cycle() => res?,
        }
    }
}

pub(crate) fn parse_flag_duration(flag: &str, value: &str) -> utility::Result<Duration> {
    let duration = parse_duration::parse(value)
        .map_err(|e| Error::Custom(format!("can't parse --{} {}: {}", flag, value, e)))?;
    if duration.as_nanos() == 0 {
        return Err(Error::Custom(format!("--{} must be greater than zero", flag)));
    }
    Ok(duration)
}
