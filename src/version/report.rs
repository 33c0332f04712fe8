/// Sink for user-facing report lines
///
/// Lines are emitted as soon as a target finishes so that a slow page does
/// not hold back the diagnostics of the others.
pub trait Reporter: Send + Sync {
    /// Reports an informational line (upgrades, timing, summary)
    fn report(&self, message: &str);

    /// Reports a failed check
    fn report_error(&self, message: &str);
}

/// Reporter that prints to stdout and stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, message: &str) {
        println!("{}", message);
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }
}
