//! # Bottom bar tab state
//!
//! Each tab owns a progress value in [0, 1] (how "active" it looks) and the
//! bar owns one indicator value holding the pill's position as a fractional
//! tab index. Selecting a tab flips the logical active key at once and starts
//! three tweens that run side by side:
//!
//! - the incoming tab's progress toward 1,
//! - the outgoing tab's progress toward 0,
//! - the indicator toward the incoming tab's index.
//!
//! A selection that arrives mid-transition retargets whatever is in flight;
//! nothing is queued. Once every tween has finished, exactly one tab sits at
//! 1 and the rest at 0.

use sani_core::{AnimatedValue, AnimationSpec, Color, Easing, Interpolate, Viewport};
use web_time::{Duration, Instant};

use crate::error::NavError;
use crate::nav::{NavItem, index_of};

/// Length of every leg of a tab switch.
pub const TRANSITION: Duration = Duration::from_millis(240);

/// Icon scale of a fully active tab.
pub const ACTIVE_ICON_SCALE: f32 = 1.08;

/// Pill width as a percentage of the viewport width.
pub const INDICATOR_WIDTH_PERCENT: f32 = 10.0;

/// Outcome of [`TabBar::select`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The key was already active; nothing was dispatched.
    Unchanged,
    /// The key is not part of this bar; nothing changed.
    Ignored,
    /// All three legs were started.
    Switched { from: &'static str, to: &'static str },
}

pub struct TabBar {
    items: Vec<NavItem>,
    /// One value per item, same order as `items`.
    progress: Vec<AnimatedValue<f32>>,
    indicator: AnimatedValue<f32>,
    active: usize,
    spec: AnimationSpec,
}

impl std::fmt::Debug for TabBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabBar")
            .field("active", &self.active_key())
            .field("indicator", self.indicator.get())
            .field("settled", &self.is_settled())
            .finish()
    }
}

impl TabBar {
    /// Builds every tween up front from `items`. Fails on an empty list,
    /// duplicate keys, or an `initial` key that is not listed.
    pub fn new(items: &[NavItem], initial: &str, spec: AnimationSpec) -> Result<Self, NavError> {
        if items.is_empty() {
            return Err(NavError::EmptyItems);
        }
        for (i, item) in items.iter().enumerate() {
            if items[..i].iter().any(|seen| seen.key == item.key) {
                return Err(NavError::DuplicateKey(item.key));
            }
        }
        let active =
            index_of(items, initial).ok_or_else(|| NavError::UnknownInitialKey(initial.into()))?;
        let progress = (0..items.len())
            .map(|i| AnimatedValue::new(if i == active { 1.0 } else { 0.0 }, spec))
            .collect();

        log::debug!("tab bar: {} tabs, initial {:?}", items.len(), initial);
        Ok(Self {
            items: items.to_vec(),
            progress,
            indicator: AnimatedValue::new(active as f32, spec),
            active,
            spec,
        })
    }

    /// Tab bar with the default 240 ms platform curve.
    pub fn with_defaults(items: &[NavItem], initial: &str) -> Result<Self, NavError> {
        Self::new(items, initial, AnimationSpec::tween(TRANSITION, Easing::EaseInOut))
    }

    /// Makes `key` the active tab as of `now`.
    ///
    /// The active key changes immediately; the visuals follow over the
    /// transition. Keys outside the bar leave it untouched, so exactly one
    /// tab is ever active.
    pub fn select(&mut self, key: &str, now: Instant) -> Selection {
        let Some(to) = index_of(&self.items, key) else {
            log::warn!("tab bar: ignoring unknown key {key:?}");
            return Selection::Ignored;
        };
        if to == self.active {
            return Selection::Unchanged;
        }
        let from = std::mem::replace(&mut self.active, to);

        self.progress[to].set_target(1.0, now);
        self.progress[from].set_target(0.0, now);
        self.indicator.set_target(to as f32, now);

        let (from, to) = (self.items[from].key, self.items[to].key);
        log::debug!("tab bar: {from:?} -> {to:?}");
        Selection::Switched { from, to }
    }

    /// Advances every tween to `now`. Returns `true` while any is running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut running = self.indicator.update(now);
        for p in &mut self.progress {
            running |= p.update(now);
        }
        running
    }

    pub fn is_settled(&self) -> bool {
        !self.indicator.is_animating() && self.progress.iter().all(|p| !p.is_animating())
    }

    pub fn active_key(&self) -> &'static str {
        self.items[self.active].key
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    /// Current progress of `key`, `None` for keys not in the bar.
    pub fn progress(&self, key: &str) -> Option<f32> {
        index_of(&self.items, key).map(|i| *self.progress[i].get())
    }

    pub fn progress_sum(&self) -> f32 {
        self.progress.iter().map(|p| *p.get()).sum()
    }

    /// Pill position as a fractional tab index.
    pub fn indicator_position(&self) -> f32 {
        *self.indicator.get()
    }
}

/// Tint between `inactive` (progress 0) and `active` (progress 1).
pub fn tint_for(progress: f32, inactive: Color, active: Color) -> Color {
    inactive.interpolate(&active, progress)
}

/// Icon scale between 1.0 and [`ACTIVE_ICON_SCALE`].
pub fn icon_scale_for(progress: f32) -> f32 {
    1.0f32.interpolate(&ACTIVE_ICON_SCALE, progress)
}

/// Left edge of the pill so it is centered under fractional tab `position`.
/// Label widths are not taken into account.
pub fn indicator_offset(position: f32, tab_width: f32, indicator_width: f32) -> f32 {
    position * tab_width + tab_width / 2.0 - indicator_width / 2.0
}

/// Fixed sizes the indicator is laid out with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorGeometry {
    pub tab_width: f32,
    pub width: f32,
}

impl IndicatorGeometry {
    pub fn new(viewport: Viewport, tab_count: usize) -> Self {
        Self {
            tab_width: viewport.width / tab_count.max(1) as f32,
            width: viewport.width_percent(INDICATOR_WIDTH_PERCENT),
        }
    }

    pub fn offset(&self, position: f32) -> f32 {
        indicator_offset(position, self.tab_width, self.width)
    }
}
