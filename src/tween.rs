use crate::ease::Ease;

/// One-shot scalar interpolation driven by external clock ticks.
///
/// Nothing here blocks or schedules: the owner calls [`Tween::advance`] once
/// per frame with the elapsed wall-clock delta and reacts to the returned
/// [`Progress`]. Completion reports the exact target value, never an
/// eased approximation.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

/// Result of advancing a tween by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Progress {
    Running(f32),
    Done(f32),
}

impl Progress {
    pub fn value(self) -> f32 {
        match self {
            Self::Running(v) | Self::Done(v) => v,
        }
    }
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            ease,
        }
    }

    /// Advances by `dt` time units. A non-positive duration completes on the
    /// first tick. Advancing past completion keeps returning `Done`.
    pub fn advance(&mut self, dt: f32) -> Progress {
        self.elapsed += dt.max(0.0);
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return Progress::Done(self.to);
        }
        let t = self.ease.apply(self.elapsed / self.duration);
        Progress::Running(self.from + (self.to - self.from) * t)
    }

    pub fn is_done(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }
}
