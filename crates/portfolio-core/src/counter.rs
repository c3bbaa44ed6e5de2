use crate::constants::COUNTER_TICK_MS;

/// Count-up animation for a hero statistic, advanced on a fixed tick.
#[derive(Clone, Debug)]
pub struct Counter {
    target: f64,
    increment: f64,
    value: f64,
    finished: bool,
}

impl Counter {
    pub fn new(target: f64, duration_ms: f64) -> Self {
        let ticks = duration_ms / COUNTER_TICK_MS as f64;
        Self {
            target,
            increment: target / ticks,
            value: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one tick and return the label to display. Once the target is
    /// reached the label is the exact target and the counter is finished.
    pub fn tick(&mut self) -> String {
        self.value += self.increment;
        if self.value >= self.target {
            self.finished = true;
            format!("{}{}", self.target, counter_suffix(self.target))
        } else {
            format!("{}{}", self.value.floor(), counter_suffix(self.target))
        }
    }
}

/// Percent for the 100 stat, "+" for everything else.
#[inline]
pub fn counter_suffix(target: f64) -> &'static str {
    if target == 100.0 {
        "%"
    } else {
        "+"
    }
}
