#![allow(non_snake_case)]
//! Widgets and the child-building idiom.
//!
//! Widgets are plain functions returning a [`View`]; children are attached
//! with [`ViewExt::child`], which accepts a single view, a `Vec`, an array or
//! a tuple of those.

pub mod inspect;
pub mod textfield;

pub use inspect::{click_by_label, find_by_label, outline};
pub use textfield::{TextField, TextFieldState};

use sani_core::*;

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(ViewKind::Column).modifier(modifier)
}

/// Children overlap; later children draw on top.
pub fn Stack(modifier: Modifier) -> View {
    View::new(ViewKind::Stack).modifier(modifier)
}

/// Vertical scroll container. Offsets and inertia belong to the host.
pub fn ScrollColumn(modifier: Modifier) -> View {
    View::new(ViewKind::ScrollV).modifier(modifier)
}

/// Horizontal scroll container without a visible indicator.
pub fn ScrollRow(modifier: Modifier) -> View {
    View::new(ViewKind::ScrollH {
        show_indicator: false,
    })
    .modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(ViewKind::Text {
        text: text.into(),
        color: Color::WHITE,
        font_size: 16.0,
        weight: FontWeight::NORMAL,
        align: TextAlign::Start,
        decoration: TextDecoration::empty(),
    })
}

pub fn Image(modifier: Modifier, id: ImageId) -> View {
    View::new(ViewKind::Image {
        id,
        tint: None,
        fit: ImageFit::Contain,
    })
    .modifier(modifier)
    .semantics(Semantics::new(Role::Image).label(id.name()))
}

/// Tappable container. `label` names it for accessibility and for
/// [`click_by_label`].
pub fn Clickable(modifier: Modifier, label: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    Box(modifier.clickable(on_click)).semantics(Semantics::new(Role::Button).label(label))
}

/// Pill button with a single text label.
pub fn Button(modifier: Modifier, text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    let text = text.into();
    Clickable(modifier, text.clone(), on_click).child(Text(text))
}

pub trait ImageExt {
    fn image_tint(self, c: Color) -> View;
    fn image_fit(self, fit: ImageFit) -> View;
}
impl ImageExt for View {
    fn image_tint(mut self, c: Color) -> View {
        if let ViewKind::Image { tint, .. } = &mut self.kind {
            *tint = Some(c);
        }
        self
    }
    fn image_fit(mut self, fit: ImageFit) -> View {
        if let ViewKind::Image { fit: f, .. } = &mut self.kind {
            *f = fit;
        }
        self
    }
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(mut self, children: impl IntoChildren) -> Self {
        self.children.extend(children.into_children());
        self
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

/// Method styling
pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, px: f32) -> View;
    fn weight(self, w: FontWeight) -> View;
    fn align(self, a: TextAlign) -> View;
    fn line_through(self) -> View;
}
impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text {
            color: text_color, ..
        } = &mut self.kind
        {
            *text_color = c;
        }
        self
    }
    fn size(mut self, px: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = px;
        }
        self
    }
    fn weight(mut self, w: FontWeight) -> View {
        if let ViewKind::Text { weight, .. } = &mut self.kind {
            *weight = w;
        }
        self
    }
    fn align(mut self, a: TextAlign) -> View {
        if let ViewKind::Text { align, .. } = &mut self.kind {
            *align = a;
        }
        self
    }
    fn line_through(mut self) -> View {
        if let ViewKind::Text { decoration, .. } = &mut self.kind {
            decoration.insert(TextDecoration::LINE_THROUGH);
        }
        self
    }
}
