use std::rc::Rc;

use bitflags::bitflags;

use crate::{Color, Modifier, Semantics};

pub type Callback = Rc<dyn Fn()>;
pub type TextCallback = Rc<dyn Fn(String)>;

/// Static identifier of an image asset. The view tree only carries it; the
/// host resolves it to pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub &'static str);

impl ImageId {
    pub fn name(&self) -> &'static str {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageFit {
    #[default]
    Contain,
    Cover,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const SEMI_BOLD: FontWeight = FontWeight(600);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct TextDecoration: u8 {
        const UNDERLINE = 0b01;
        const LINE_THROUGH = 0b10;
    }
}

#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    Stack,
    ScrollV,
    ScrollH {
        show_indicator: bool,
    },
    Text {
        text: String,
        color: Color,
        font_size: f32,
        weight: FontWeight,
        align: TextAlign,
        decoration: TextDecoration,
    },
    Image {
        id: ImageId,
        tint: Option<Color>,
        fit: ImageFit,
    },
    TextField {
        value: String,
        hint: String,
        hint_color: Color,
        color: Color,
        font_size: f32,
        on_change: Option<TextCallback>,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Stack => write!(f, "Stack"),
            ViewKind::ScrollV => write!(f, "ScrollV"),
            ViewKind::ScrollH { show_indicator } => f
                .debug_struct("ScrollH")
                .field("show_indicator", show_indicator)
                .finish(),
            ViewKind::Text {
                text,
                color,
                font_size,
                weight,
                align,
                decoration,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .field("weight", weight)
                .field("align", align)
                .field("decoration", decoration)
                .finish(),
            ViewKind::Image { id, tint, fit } => f
                .debug_struct("Image")
                .field("id", id)
                .field("tint", tint)
                .field("fit", fit)
                .finish(),
            ViewKind::TextField {
                value,
                hint,
                hint_color,
                color,
                font_size,
                on_change,
            } => f
                .debug_struct("TextField")
                .field("value", value)
                .field("hint", hint)
                .field("hint_color", hint_color)
                .field("color", color)
                .field("font_size", font_size)
                .field("on_change", &on_change.as_ref().map(|_| "<callback>"))
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<Semantics>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn semantics(mut self, s: Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Depth-first, pre-order walk over this view and its descendants.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }

    pub fn find(&self, pred: &dyn Fn(&View) -> bool) -> Option<&View> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    pub fn label(&self) -> Option<&str> {
        self.semantics.as_ref().and_then(|s| s.label.as_deref())
    }

    /// Text of a `Text` view.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ViewKind::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
