//! Continuous scroll driver
//!
//! Advances the row offset as `(now - anchor) * speed`. The anchor is taken
//! lazily on the first tick and rebased whenever the driver resumes or its
//! speed changes, so the offset never jumps.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ScrollDriver {
    speed: f32,
    /// Frame-clock time (seconds) at which the offset was zero. May be
    /// negative after a rebase.
    anchor: Option<f64>,
    offset: f32,
    paused: bool,
    needs_rebase: bool,
}

impl ScrollDriver {
    pub fn new(speed: f32) -> Self {
        Self {
            speed: speed.max(0.0),
            anchor: None,
            offset: 0.0,
            paused: false,
            needs_rebase: false,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze the offset at its current value.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume from the frozen offset on the next tick.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.needs_rebase = true;
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Change speed without moving the current offset.
    pub fn set_speed(&mut self, speed: f32) {
        let speed = speed.max(0.0);
        if (speed - self.speed).abs() > f32::EPSILON {
            self.speed = speed;
            self.needs_rebase = true;
        }
    }

    /// Advance to frame-clock time `now` and return the new offset.
    ///
    /// The offset never decreases, even if `now` goes backwards.
    pub fn tick(&mut self, now: Duration) -> f32 {
        if self.paused {
            return self.offset;
        }

        let now_s = now.as_secs_f64();
        let speed = f64::from(self.speed);

        if self.needs_rebase || self.anchor.is_none() {
            self.needs_rebase = false;
            if speed <= 0.0 {
                self.anchor = Some(now_s);
                return self.offset;
            }
            self.anchor = Some(now_s - f64::from(self.offset) / speed);
        }

        let anchor = self.anchor.unwrap_or(now_s);
        let next = ((now_s - anchor) * speed) as f32;
        if next > self.offset {
            self.offset = next;
        }
        self.offset
    }
}
