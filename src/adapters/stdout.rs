//! [`OutputPort`] that prints each line to standard output.

use std::io::Write;

use crate::app::ports::OutputPort;

pub struct StdoutOutput {
    stdout: std::io::Stdout,
}

impl StdoutOutput {
    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
        }
    }
}

impl Default for StdoutOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPort for StdoutOutput {
    fn output_line(&mut self, line: &str) {
        let mut lock = self.stdout.lock();
        // A closed stdout leaves nothing to report to.
        let _ = writeln!(lock, "{line}");
        let _ = lock.flush();
    }
}
