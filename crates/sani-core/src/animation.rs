//! Tweens driven by an explicit clock.
//!
//! Nothing here reads wall time on its own: callers pass the `Instant` they
//! got from a [`Clock`], so a frame loop uses [`SystemClock`] and tests step a
//! [`ManualClock`] by exact amounts.

use std::cell::Cell;

use web_time::{Duration, Instant};

use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` to eased progress. Input is clamped to [0, 1];
    /// every curve is monotonic with f(0) = 0 and f(1) = 1.
    pub fn interpolate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
            delay: Duration::ZERO,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn linear(duration: Duration) -> Self {
        Self::tween(duration, Easing::Linear)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Color {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self.lerp(*other, t)
    }
}

/// Source of animation time.
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

/// Wall-clock time, for hosts that repaint on a real frame loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock you step by hand. Shared behind `Rc` so the screen and the test
/// observe the same time.
#[derive(Debug)]
pub struct ManualClock {
    t: Cell<Instant>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl ManualClock {
    pub fn new(start: Instant) -> Self {
        Self {
            t: Cell::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }

    pub fn set(&self, t: Instant) {
        self.t.set(t);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

/// Value that tweens from where it currently is toward a target.
#[derive(Clone, Debug)]
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    /// Retargets the tween. An in-flight tween is interrupted: the new one
    /// starts from the value reached at `now` and runs a full duration.
    pub fn set_target(&mut self, target: T, now: Instant) {
        self.update(now);
        self.start = self.current.clone();
        self.target = target;
        self.start_time = Some(now);
    }

    /// Advances to `now`. Returns `true` while the tween is still running.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        let elapsed = now.saturating_duration_since(start);

        if elapsed < self.spec.delay {
            return true;
        }

        let animation_time = elapsed - self.spec.delay;

        if animation_time >= self.spec.duration {
            self.current = self.target.clone();
            self.start_time = None;
            return false;
        }

        let t = animation_time.as_secs_f32() / self.spec.duration.as_secs_f32();
        let eased_t = self.spec.easing.interpolate(t);
        self.current = self.start.interpolate(&self.target, eased_t);

        true
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }
}
