use crate::constants::CURSOR_TRAIL_LEN;
use std::collections::VecDeque;

/// Bounded FIFO of cursor dots; the oldest is evicted once full.
#[derive(Debug)]
pub struct CursorTrail<T> {
    dots: VecDeque<T>,
    capacity: usize,
}

impl<T> Default for CursorTrail<T> {
    fn default() -> Self {
        Self::with_capacity(CURSOR_TRAIL_LEN)
    }
}

impl<T> CursorTrail<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dots: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Add a dot, returning the one evicted to make room (if any).
    pub fn push(&mut self, dot: T) -> Option<T> {
        self.dots.push_back(dot);
        if self.dots.len() > self.capacity {
            self.dots.pop_front()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.dots.iter()
    }
}

pub fn cursor_dot_style(x: i32, y: i32) -> String {
    format!(
        "position: fixed; width: 4px; height: 4px; background: rgba(0, 82, 204, 0.3); \
         border-radius: 50%; pointer-events: none; z-index: 9999; left: {x}px; top: {y}px; \
         animation: fadeDot 0.8s ease-out forwards;"
    )
}

pub const CURSOR_KEYFRAMES: &str = "\
@keyframes fadeDot {
    to { opacity: 0; transform: scale(2); }
}
";
