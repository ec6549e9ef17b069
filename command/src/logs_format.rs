use utility::telemetry::LogEntry;
use utility::{Error, Result};

pub const PLAIN_LOG_FORMAT: &str = "plain";
pub const KEY_VALUE_LOG_FORMAT: &str = "keyvalue";
pub const JSON_LOG_FORMAT: &str = "json";

/// LogFormatter converts a log entry to a line. The flags select whether the
/// function name and the trace id are printed
pub type LogFormatter = fn(&LogEntry, bool, bool) -> Result<String>;

/// get_log_formatter maps a formatter name to a LogFormatter, unknown names fall back to plain
pub fn get_log_formatter(name: &str) -> LogFormatter {
    match name {
        JSON_LOG_FORMAT => json_format_message,
        KEY_VALUE_LOG_FORMAT => key_value_formatter,
        _ => plain_formatter,
    }
}

fn key_value_formatter(msg: &LogEntry, include_name: bool, include_trace: bool) -> Result<String> {
    Ok(key_value_format_message(msg, include_name, include_trace))
}

fn plain_formatter(msg: &LogEntry, include_name: bool, include_trace: bool) -> Result<String> {
    Ok(plain_format_message(msg, include_name, include_trace))
}

/// json_format_message serializes the entire entry, the options are ignored
pub fn json_format_message(
    msg: &LogEntry,
    _include_name: bool,
    _include_trace: bool,
) -> Result<String> {
    serde_json::to_string(msg).map_err(|e| Error::Custom(e.to_string()))
}

/// returns the entry in the format `timestamp="" level="" name="" trace_id="" text=""`
pub fn key_value_format_message(msg: &LogEntry, include_name: bool, include_trace: bool) -> String {
    let mut b = String::new();

    if !msg.timestamp.is_empty() {
        b.push_str("timestamp=\"");
        b.push_str(msg.timestamp.as_str());
        b.push_str("\" ");
    }

    if !msg.level.is_empty() {
        b.push_str("level=\"");
        b.push_str(msg.level.as_str());
        b.push_str("\" ");
    }

    if include_name {
        b.push_str("name=\"");
        b.push_str(msg.function_name.as_str());
        b.push_str("\" ");
    }

    if include_trace {
        b.push_str("trace_id=\"");
        b.push_str(msg.trace_id.as_str());
        b.push_str("\" ");
    }

    b.push_str("text=\"");
    b.push_str(msg.body.trim_end_matches('\n'));
    b.push('"');

    b
}

/// formats an entry as "<timestamp> <LEVEL> <name> (<trace_id>) <text>"
pub fn plain_format_message(msg: &LogEntry, include_name: bool, include_trace: bool) -> String {
    let mut b = String::new();

    if !msg.timestamp.is_empty() {
        b.push_str(msg.timestamp.as_str());
        b.push(' ');
    }

    if !msg.level.is_empty() {
        b.push_str(msg.level.to_uppercase().as_str());
        b.push(' ');
    }

    if include_name {
        b.push_str(msg.function_name.as_str());
        b.push(' ');
    }

    if include_trace && !msg.trace_id.is_empty() {
        b.push('(');
        b.push_str(msg.trace_id.as_str());
        b.push(')');
        b.push(' ');
    }

    b.push_str(msg.body.trim_end_matches('\n'));

    b
}
