use std::error::Error;
use std::sync::{Arc, Mutex};

use super::Console;
use crate::internal::facade::ConsoleChannel;

/// Console that records writes instead of printing them
#[derive(Clone, Default)]
pub struct RecordingConsole {
    pub writes: Arc<Mutex<Vec<(ConsoleChannel, String)>>>,
    pub errors: Arc<Mutex<Vec<String>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_writes(&self) -> Vec<(ConsoleChannel, String)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn get_errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Console for RecordingConsole {
    fn write(&self, channel: ConsoleChannel, message: &str) {
        self.writes.lock().unwrap().push((channel, message.to_string()));
    }

    fn report_error(&self, error: &dyn Error) {
        self.errors.lock().unwrap().push(error.to_string());
    }
}
