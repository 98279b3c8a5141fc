//! Log capture for tests.
//!
//! `CapturedLogs::install` sets a plain-text fmt subscriber as the default for
//! the current thread and keeps everything it writes. `#[tokio::test]` runs on
//! a current-thread runtime, so events from awaited futures land here too.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::subscriber::DefaultGuard;

#[derive(Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    /// Capture every event until the returned guard is dropped.
    pub fn install() -> (Self, DefaultGuard) {
        let logs = Self::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .map(|b| String::from_utf8_lossy(&b).into_owned())
            .unwrap_or_default()
    }

    /// Lines logged at `ERROR`.
    pub fn errors(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains("ERROR"))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_events_while_installed() {
        let (logs, guard) = CapturedLogs::install();
        tracing::error!(slug = "courage-in-winter", "lookup failed");
        tracing::debug!("not an error");
        drop(guard);
        tracing::error!("after the guard");

        let errors = logs.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("lookup failed"));
        assert!(errors[0].contains("slug=\"courage-in-winter\""));
    }
}
