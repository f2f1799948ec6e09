//! # View model, scaling, and animation
//!
//! `sani-core` holds the pieces every screen is made of:
//!
//! - [`View`] / [`ViewKind`] / [`Modifier`]: a declarative tree handed to the
//!   host surface. Widgets in `sani-ui` build it.
//! - [`Viewport`]: converts sizes drawn against the 375×812 reference screen
//!   into device pixels.
//! - [`animation`]: eased tweens advanced by an explicit [`Clock`], so
//!   transitions can be stepped frame by frame in tests.
//! - [`locals`]: theme and viewport provided to everything built inside a
//!   `with_*` closure.
//!
//! ```rust
//! use sani_core::*;
//!
//! let vp = Viewport::new(750.0, 1624.0);
//! assert_eq!(vp.width_percent(10.0), 75.0);
//! assert_eq!(vp.moderate_scale(12.0, 0.0), 12.0);
//! assert_eq!(vp.moderate_scale(12.0, 1.0), 24.0);
//! ```

pub mod animation;
pub mod color;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod scale;
pub mod semantics;
pub mod tests;
pub mod view;

pub use animation::{AnimatedValue, AnimationSpec, Clock, Easing, Interpolate, ManualClock, SystemClock};
pub use color::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use prelude::*;
pub use scale::*;
pub use semantics::*;
pub use view::*;
