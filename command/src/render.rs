use crate::logs_format::plain_format_message;
use proxy::describe::FunctionView;
use proxy::probe::ProbeResult;
use proxy::status::StatusView;
use utility::model::{Function, Trigger};
use utility::telemetry::ExecutionMetric;

const LABEL_WIDTH: usize = 20;

/// shows the probe value through `f`, or `-` and the reason when the probe came back empty
pub fn or_dash<T, F>(probe: &ProbeResult<T>, f: F) -> String
where
    F: Fn(&T) -> String,
{
    match &probe.result {
        Ok(value) => f(value),
        Err(e) => format!("- ({})", e),
    }
}

pub fn total_executions(metrics: &[ExecutionMetric]) -> u64 {
    metrics.iter().map(|m| m.count).sum()
}

fn line(label: &str, value: &str) -> String {
    format!("{:width$}{}\n", label, value, width = LABEL_WIDTH)
}

/// formats one aggregation cycle as label/value lines
pub fn render_status(view: &StatusView) -> String {
    let mut fmt = line("Status:", view.status.to_string().as_str());
    fmt.push_str(line("Checked at:", view.checked_at.to_rfc3339().as_str()).as_str());
    fmt.push_str(
        line(
            "Liveness:",
            or_dash(&view.liveness, |h| {
                format!("{} ({} ms)", h.status, view.liveness.latency.as_millis())
            })
            .as_str(),
        )
        .as_str(),
    );
    fmt.push_str(line("Functions:", or_dash(&view.functions, |n| n.to_string()).as_str()).as_str());
    fmt.push_str(line("Triggers:", or_dash(&view.triggers, |n| n.to_string()).as_str()).as_str());
    fmt.push_str(
        line(
            "Executions:",
            or_dash(&view.metrics, |m| total_executions(m).to_string()).as_str(),
        )
        .as_str(),
    );
    fmt.push_str(line("Recent logs:", or_dash(&view.logs, |l| l.len().to_string()).as_str()).as_str());
    fmt
}

/// formats everything known about one function, followed by its recent log lines
pub fn render_function_view(name: &str, view: &FunctionView) -> String {
    let mut fmt = line("Name:", name);
    match &view.function.result {
        Ok(function) => {
            fmt.push_str(line("Language:", function.language.to_string().as_str()).as_str());
            fmt.push_str(line("Executable:", function.executable.as_str()).as_str());
            fmt.push_str(line("CPU:", function.cpu.as_str()).as_str());
            fmt.push_str(line("Memory:", function.memory.as_str()).as_str());
            fmt.push_str(line("Read only:", function.readonly.to_string().as_str()).as_str());
        }
        Err(e) => fmt.push_str(line("Function:", format!("- ({})", e).as_str()).as_str()),
    }
    fmt.push_str(
        line(
            "Executions:",
            or_dash(&view.metrics, |m| total_executions(m).to_string()).as_str(),
        )
        .as_str(),
    );
    match &view.logs.result {
        Ok(logs) if logs.is_empty() => fmt.push_str(line("Recent logs:", "none").as_str()),
        Ok(logs) => {
            fmt.push_str("Recent logs:\n");
            for entry in logs {
                fmt.push_str("  ");
                fmt.push_str(plain_format_message(entry, false, false).as_str());
                fmt.push('\n');
            }
        }
        Err(e) => fmt.push_str(line("Recent logs:", format!("- ({})", e).as_str()).as_str()),
    }
    fmt
}

pub fn render_functions(functions: &[Function], verbose: bool) -> String {
    let mut fmt = String::new();
    if verbose {
        let mut max = 40;
        for function in functions {
            if function.executable.len() > max {
                max = function.executable.len();
            }
        }
        fmt.push_str(
            format_with_space(
                &["Function", "Language", "CPU", "Memory", "Read only", "Executable"],
                &[30, 10, 10, 10, 11, max],
            )
            .as_str(),
        );
        for function in functions {
            fmt.push_str(
                format_with_space(
                    &[
                        function.name.as_str(),
                        function.language.to_string().as_str(),
                        function.cpu.as_str(),
                        function.memory.as_str(),
                        function.readonly.to_string().as_str(),
                        function.executable.as_str(),
                    ],
                    &[30, 10, 10, 10, 11, max],
                )
                .as_str(),
            );
        }
    } else {
        fmt.push_str(format_with_space(&["Function", "Language", "Read only"], &[30, 10, 5]).as_str());
        for function in functions {
            fmt.push_str(
                format_with_space(
                    &[
                        function.name.as_str(),
                        function.language.to_string().as_str(),
                        function.readonly.to_string().as_str(),
                    ],
                    &[30, 10, 5],
                )
                .as_str(),
            );
        }
    }
    fmt
}

pub fn render_triggers(triggers: &[Trigger]) -> String {
    let widths = [30, 8, 30, 30];
    let mut fmt = format_with_space(&["Trigger", "Method", "Path", "Function"], &widths);
    for trigger in triggers {
        fmt.push_str(
            format_with_space(
                &[
                    trigger.name.as_str(),
                    trigger.method.as_str(),
                    trigger.path.as_str(),
                    trigger.function_name.as_str(),
                ],
                &widths,
            )
            .as_str(),
        );
    }
    fmt
}

/// pads every column to its width, the last one is left as is
fn format_with_space(columns: &[&str], widths: &[usize]) -> String {
    let mut fmt = String::new();
    for (i, (column, width)) in columns.iter().zip(widths).enumerate() {
        if i + 1 == columns.len() {
            fmt.push_str(column);
        } else {
            fmt.push_str(format!("{:width$} ", column, width = width).as_str());
        }
    }
    fmt.push('\n');
    fmt
}
