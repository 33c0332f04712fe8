//! Reporter test utilities

use std::sync::Mutex;

use toolchain_check::version::report::Reporter;

/// Reporter that captures lines instead of printing them
#[derive(Default)]
pub struct CollectingReporter {
    lines: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl CollectingReporter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    /// Every captured line, informational and error, in no particular order
    pub fn all(&self) -> Vec<String> {
        let mut all = self.lines();
        all.extend(self.errors());
        all
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
