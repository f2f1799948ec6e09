use std::rc::Rc;

use taffy::{AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};

use crate::{Callback, Color, Size, Transform};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
    pub radius: f32,
}

/// Drop shadow. `elevation` is the Android-style z hint; hosts without real
/// shadows may use it alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub opacity: f32,
    pub radius: f32,
    pub elevation: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionType {
    Relative,
    Absolute,
}

#[derive(Clone, Default)]
pub struct Modifier {
    pub size: Option<Size>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// Fraction of the parent's width (1.0 == fill).
    pub fill_w: Option<f32>,
    /// Fraction of the parent's height.
    pub fill_h: Option<f32>,
    pub padding: Option<PaddingValues>,
    pub margin: Option<PaddingValues>,
    pub background: Option<Color>,
    pub border: Option<Border>,
    /// Top edge only, as used by the bottom bar.
    pub border_top: Option<(f32, Color)>,
    pub clip_rounded: Option<f32>,
    pub shadow: Option<Shadow>,
    pub flex_grow: Option<f32>,
    pub flex_wrap: Option<FlexWrap>,
    pub flex_dir: Option<FlexDirection>,
    pub align_self: Option<AlignSelf>,
    pub justify_content: Option<JustifyContent>,
    pub align_items_container: Option<AlignItems>,
    pub position_type: Option<PositionType>,
    pub offset_left: Option<f32>,
    pub offset_right: Option<f32>,
    pub offset_top: Option<f32>,
    pub offset_bottom: Option<f32>,
    pub alpha: Option<f32>,
    pub transform: Option<Transform>,
    pub on_click: Option<Callback>,
    /// Opacity applied while pressed.
    pub press_alpha: Option<f32>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("size", &self.size)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fill_w", &self.fill_w)
            .field("fill_h", &self.fill_h)
            .field("padding", &self.padding)
            .field("margin", &self.margin)
            .field("background", &self.background)
            .field("border", &self.border)
            .field("border_top", &self.border_top)
            .field("clip_rounded", &self.clip_rounded)
            .field("shadow", &self.shadow)
            .field("flex_grow", &self.flex_grow)
            .field("flex_wrap", &self.flex_wrap)
            .field("flex_dir", &self.flex_dir)
            .field("align_self", &self.align_self)
            .field("justify_content", &self.justify_content)
            .field("align_items_container", &self.align_items_container)
            .field("position_type", &self.position_type)
            .field("offset_left", &self.offset_left)
            .field("offset_right", &self.offset_right)
            .field("offset_top", &self.offset_top)
            .field("offset_bottom", &self.offset_bottom)
            .field("alpha", &self.alpha)
            .field("transform", &self.transform)
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .field("press_alpha", &self.press_alpha)
            .finish()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.size = Some(Size {
            width: w,
            height: h,
        });
        self
    }
    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn fill_max_size(self) -> Self {
        self.fill_max_width().fill_max_height()
    }
    pub fn fill_max_width(self) -> Self {
        self.fill_width(1.0)
    }
    pub fn fill_max_height(mut self) -> Self {
        self.fill_h = Some(1.0);
        self
    }
    /// Width as a fraction of the parent, e.g. `0.9` for 90%.
    pub fn fill_width(mut self, fraction: f32) -> Self {
        self.fill_w = Some(fraction);
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(PaddingValues {
            left: v,
            right: v,
            top: v,
            bottom: v,
        });
        self
    }
    pub fn padding_horizontal(mut self, v: f32) -> Self {
        let mut p = self.padding.unwrap_or_default();
        p.left = v;
        p.right = v;
        self.padding = Some(p);
        self
    }
    pub fn padding_vertical(mut self, v: f32) -> Self {
        let mut p = self.padding.unwrap_or_default();
        p.top = v;
        p.bottom = v;
        self.padding = Some(p);
        self
    }
    pub fn padding_bottom(mut self, v: f32) -> Self {
        let mut p = self.padding.unwrap_or_default();
        p.bottom = v;
        self.padding = Some(p);
        self
    }
    pub fn margin_top(mut self, v: f32) -> Self {
        let mut m = self.margin.unwrap_or_default();
        m.top = v;
        self.margin = Some(m);
        self
    }
    pub fn margin_bottom(mut self, v: f32) -> Self {
        let mut m = self.margin.unwrap_or_default();
        m.bottom = v;
        self.margin = Some(m);
        self
    }
    pub fn margin_right(mut self, v: f32) -> Self {
        let mut m = self.margin.unwrap_or_default();
        m.right = v;
        self.margin = Some(m);
        self
    }
    pub fn margin_vertical(self, v: f32) -> Self {
        self.margin_top(v).margin_bottom(v)
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn border(mut self, width: f32, color: Color, radius: f32) -> Self {
        self.border = Some(Border {
            width,
            color,
            radius,
        });
        self
    }
    pub fn border_top(mut self, width: f32, color: Color) -> Self {
        self.border_top = Some((width, color));
        self
    }
    pub fn clip_rounded(mut self, radius: f32) -> Self {
        self.clip_rounded = Some(radius);
        self
    }
    pub fn shadow(mut self, color: Color, opacity: f32, radius: f32, elevation: f32) -> Self {
        self.shadow = Some(Shadow {
            color,
            opacity,
            radius,
            elevation,
        });
        self
    }
    pub fn flex_grow(mut self, v: f32) -> Self {
        self.flex_grow = Some(v);
        self
    }
    pub fn flex_wrap(mut self, w: FlexWrap) -> Self {
        self.flex_wrap = Some(w);
        self
    }
    pub fn flex_dir(mut self, d: FlexDirection) -> Self {
        self.flex_dir = Some(d);
        self
    }
    pub fn align_self(mut self, a: AlignSelf) -> Self {
        self.align_self = Some(a);
        self
    }
    pub fn justify_content(mut self, j: JustifyContent) -> Self {
        self.justify_content = Some(j);
        self
    }
    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items_container = Some(a);
        self
    }
    pub fn absolute(mut self) -> Self {
        self.position_type = Some(PositionType::Absolute);
        self
    }
    pub fn offset(
        mut self,
        left: Option<f32>,
        top: Option<f32>,
        right: Option<f32>,
        bottom: Option<f32>,
    ) -> Self {
        self.offset_left = left;
        self.offset_top = top;
        self.offset_right = right;
        self.offset_bottom = bottom;
        self
    }
    pub fn offset_left(mut self, v: f32) -> Self {
        self.offset_left = Some(v);
        self
    }
    pub fn offset_top(mut self, v: f32) -> Self {
        self.offset_top = Some(v);
        self
    }
    pub fn offset_bottom(mut self, v: f32) -> Self {
        self.offset_bottom = Some(v);
        self
    }
    pub fn alpha(mut self, a: f32) -> Self {
        self.alpha = Some(a);
        self
    }
    pub fn transform(mut self, t: Transform) -> Self {
        self.transform = Some(t);
        self
    }
    pub fn scale(mut self, s: f32) -> Self {
        let t = self.transform.unwrap_or_else(Transform::identity);
        self.transform = Some(t.combine(&Transform::scale(s)));
        self
    }
    pub fn translate(mut self, x: f32, y: f32) -> Self {
        let t = self.transform.unwrap_or_else(Transform::identity);
        self.transform = Some(t.combine(&Transform::translate(x, y)));
        self
    }
    pub fn clickable(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }
    pub fn press_alpha(mut self, a: f32) -> Self {
        self.press_alpha = Some(a);
        self
    }
}
