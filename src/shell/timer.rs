use std::path::Path;
use std::time::{Duration, Instant};

use crate::shell::{ShellError, run_in};

/// Run `command` in `dir` and return its wall time
pub fn time_command(command: &str, dir: &Path) -> Result<Duration, ShellError> {
    let started = Instant::now();
    run_in(command, dir)?;
    Ok(started.elapsed())
}

/// Format as `H:MM:SS[.ffffff]`, prefixed with `N day(s), ` past 24 hours
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;
    let micros = elapsed.subsec_micros();

    let mut formatted = match days {
        0 => String::new(),
        1 => "1 day, ".to_string(),
        n => format!("{} days, ", n),
    };
    formatted.push_str(&format!("{}:{:02}:{:02}", hours, minutes, seconds));
    if micros > 0 {
        formatted.push_str(&format!(".{:06}", micros));
    }
    formatted
}
