//! Composition locals: values visible to everything built inside a
//! `with_*` closure, without threading them through every constructor.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::{Color, Viewport};

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn provide<T: 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        LOCALS_STACK.with(|st| {
            if let Some(top) = st.borrow_mut().last_mut() {
                top.insert(TypeId::of::<T>(), Box::new(value));
            }
        });
        f()
    })
}

fn current<T: Copy + Default + 'static>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return *t;
            }
        }
        T::default()
    })
}

/// Palette of the home screen. Dark-only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Screen background and bottom bar.
    pub background: Color,
    /// Cards and carousel tiles.
    pub surface: Color,
    /// Search bar fill.
    pub surface_variant: Color,
    pub on_surface: Color,
    /// Secondary text (card subtitles, AQI label).
    pub on_surface_muted: Color,
    /// Text laid over photos.
    pub on_photo_muted: Color,
    pub outline: Color,
    pub divider: Color,
    pub placeholder: Color,
    /// "View All" links.
    pub accent: Color,
    /// AQI meter fill.
    pub highlight: Color,
    pub track: Color,
    pub nav_inactive: Color,
    pub nav_active: Color,
    /// Pill-shaped call-to-action buttons.
    pub button_bg: Color,
    pub on_button: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#000"),
            surface: Color::from_hex("#111"),
            surface_variant: Color::from_hex("#1A1A1A"),
            on_surface: Color::WHITE,
            on_surface_muted: Color::from_hex("#aaa"),
            on_photo_muted: Color::from_hex("#ccc"),
            outline: Color::from_hex("#333"),
            divider: Color::from_hex("#222"),
            placeholder: Color::from_hex("#888"),
            accent: Color::from_hex("#E63946"),
            highlight: Color::from_hex("#FFD700"),
            track: Color::from_hex("#333"),
            nav_inactive: Color::from_hex("#888"),
            nav_active: Color::from_hex("#fff"),
            button_bg: Color::WHITE,
            on_button: Color::BLACK,
        }
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    provide(theme, f)
}

pub fn with_viewport<R>(viewport: Viewport, f: impl FnOnce() -> R) -> R {
    provide(viewport, f)
}

pub fn theme() -> Theme {
    current::<Theme>()
}

/// Viewport provided by the nearest `with_viewport`, or the 375×812 base.
pub fn viewport() -> Viewport {
    current::<Viewport>()
}
