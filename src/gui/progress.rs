// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Writes load status into the shared strings the toolbar reads each frame.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    notice: Arc<Mutex<Option<String>>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, notice: Arc<Mutex<Option<String>>>) -> Self {
        Self { status, notice }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn warn(&mut self, msg: &str) {
        if let Ok(mut n) = self.notice.lock() {
            *n = Some(s!(msg));
        }
    }
}
