//! # Sani home screen
//!
//! A scrollable home view (logo, search, feature cards, air-quality card,
//! product and service carousels) over a fixed bottom navigation bar.
//!
//! The only stateful part is the bar: [`TabBar`] keeps one tweened progress
//! value per tab plus the sliding pill's position, and [`HomeScreen`] turns
//! that state into a fresh [`View`](sani_core::View) tree every frame.
//!
//! ```rust
//! use std::rc::Rc;
//! use sani_core::ManualClock;
//! use sani_home::{HomeConfig, HomeScreen, nav, tabs::TRANSITION};
//!
//! let clock = Rc::new(ManualClock::default());
//! let screen = HomeScreen::new(&HomeConfig::default(), clock.clone()).unwrap();
//!
//! screen.press(nav::SERVICES);
//! clock.advance(TRANSITION);
//! while screen.frame() {}
//!
//! assert_eq!(screen.tabs().progress(nav::SERVICES), Some(1.0));
//! assert_eq!(screen.tabs().indicator_position(), 1.0);
//! ```

pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod nav;
pub mod navbar;
pub mod screen;
pub mod sections;
pub mod tabs;

pub use config::HomeConfig;
pub use error::{ConfigError, HomeError, NavError};
pub use nav::{NAV_ITEMS, NavItem};
pub use screen::HomeScreen;
pub use tabs::{Selection, TabBar};
