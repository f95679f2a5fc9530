use crate::constants::TYPEWRITER_CHAR_MS;
use std::time::Duration;

/// Reveals a string one character per interval.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    char_ms: f64,
    shown: usize,
    accum_ms: f64,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_interval(text, TYPEWRITER_CHAR_MS)
    }

    pub fn with_interval(text: impl Into<String>, char_ms: f64) -> Self {
        Self {
            text: text.into(),
            char_ms: char_ms.max(1.0),
            shown: 0,
            accum_ms: 0.0,
        }
    }

    /// Advances by `dt`. Returns true when the visible text changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.is_done() {
            return false;
        }
        let total = self.text.chars().count();
        let before = self.shown;
        self.accum_ms += dt.as_nanos() as f64 / 1_000_000.0;
        while self.accum_ms >= self.char_ms && self.shown < total {
            self.accum_ms -= self.char_ms;
            self.shown += 1;
        }
        self.shown != before
    }

    /// Text revealed so far, always ending on a char boundary.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.chars().count()
    }

    pub fn restart(&mut self) {
        self.shown = 0;
        self.accum_ms = 0.0;
    }
}
