use crate::constants::TYPING_DEFAULT_SPEED_MS;

/// Reveals a string one character per frame.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    shown: usize,
    speed_ms: i32,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_speed(text, TYPING_DEFAULT_SPEED_MS)
    }

    pub fn with_speed(text: impl Into<String>, speed_ms: i32) -> Self {
        Self {
            text: text.into(),
            shown: 0,
            speed_ms,
        }
    }

    pub fn speed_ms(&self) -> i32 {
        self.speed_ms
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.len()
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    /// Append the next character and return the text typed so far, or `None`
    /// once everything is visible.
    pub fn next_frame(&mut self) -> Option<&str> {
        let next = self.text[self.shown..].chars().next()?;
        self.shown += next.len_utf8();
        Some(self.visible())
    }
}
