use anstyle::{AnsiColor, Style};
use is_terminal::IsTerminal;
use std::fmt::Display;
use std::io::{self, Write};
use std::time::{Duration, Instant};

const LABEL_WIDTH: usize = 12;

/// Kind of status line. Warnings and errors go to stderr so stdout can
/// carry activation scripts untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Pending,
    Success,
    Info,
    Warn,
    Error,
}

impl Status {
    fn color(self) -> AnsiColor {
        match self {
            Status::Pending => AnsiColor::Cyan,
            Status::Success => AnsiColor::Green,
            Status::Info => AnsiColor::Blue,
            Status::Warn => AnsiColor::Yellow,
            Status::Error => AnsiColor::Red,
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Status::Warn | Status::Error)
    }
}

/// Render a right-aligned label followed by `message`. Continuation lines
/// are indented under the message.
fn render(status: Status, label: &str, message: &str, color: bool) -> String {
    let label = format!("{label:>LABEL_WIDTH$}");
    let label = if color {
        let style = Style::new().bold().fg_color(Some(status.color().into()));
        format!("{}{label}{}", style.render(), style.render_reset())
    } else {
        label
    };

    let mut out = String::new();
    for (idx, line) in message.split('\n').enumerate() {
        if idx == 0 {
            out.push_str(&label);
        } else {
            out.push_str(&" ".repeat(LABEL_WIDTH));
        }
        out.push(' ');
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn emit(status: Status, label: &str, message: &str) {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    // Output errors are ignored; there is nowhere left to report them
    if status.to_stderr() {
        let mut err = io::stderr().lock();
        let text = render(status, label, message, err.is_terminal() && !no_color);
        let _ = err.write_all(text.as_bytes());
    } else {
        let mut out = io::stdout().lock();
        let text = render(status, label, message, out.is_terminal() && !no_color);
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    match secs {
        60.. if secs % 60 == 0 => format!("{}m", secs / 60),
        60.. => format!("{}m {}s", secs / 60, secs % 60),
        1.. => format!("{:.2}s", duration.as_secs_f64()),
        _ if duration.as_millis() >= 1 => format!("{}ms", duration.as_millis()),
        _ => format!("{}µs", duration.as_micros()),
    }
}

pub fn status(label: &str, message: impl Display) {
    emit(Status::Pending, label, &message.to_string());
}

pub fn info(message: impl Display) {
    emit(Status::Info, "Info", &message.to_string());
}

pub fn warn(message: impl Display) {
    emit(Status::Warn, "Warning", &message.to_string());
}

pub fn error(message: impl Display) {
    emit(Status::Error, "Error", &message.to_string());
}

pub fn success(label: &str, message: impl Display) {
    emit(Status::Success, label, &message.to_string());
}

/// A timed step. Finish it with [`Progress::success`] or [`Progress::fail`].
pub struct Progress {
    message: String,
    started: Instant,
}

impl Progress {
    pub fn new(label: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        emit(Status::Pending, label, &message);
        Self {
            message,
            started: Instant::now(),
        }
    }

    pub fn success(self, label: &str, detail: Option<String>) {
        let elapsed = format_duration(self.started.elapsed());
        let message = match detail.filter(|d| !d.is_empty()) {
            Some(detail) => format!("{} {detail} in {elapsed}", self.message),
            None => format!("{} in {elapsed}", self.message),
        };
        emit(Status::Success, label, &message);
    }

    /// Mark the step failed. The error itself is reported by the caller.
    pub fn fail(self, label: &str) {
        let elapsed = format_duration(self.started.elapsed());
        emit(
            Status::Warn,
            label,
            &format!("{} (stopped after {elapsed})", self.message),
        );
    }
}
