pub use crate::animation::*;
pub use crate::color::Color;
pub use crate::geometry::{Size, Transform};
pub use crate::locals::{Theme, theme, viewport, with_theme, with_viewport};
pub use crate::modifier::Modifier;
pub use crate::scale::Viewport;
pub use crate::semantics::{Role, Semantics};
pub use crate::view::{
    FontWeight, ImageFit, ImageId, TextAlign, TextDecoration, View, ViewKind,
};
pub use taffy::{AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};
