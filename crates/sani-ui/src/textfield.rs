//! Single-line text input.
//!
//! The field only stores what was typed; nothing on the screen interprets it.

use std::ops::Range;
use std::rc::Rc;

use sani_core::*;
use unicode_segmentation::UnicodeSegmentation;

/// Start of the grapheme that ends at or straddles `byte`.
fn grapheme_before(text: &str, byte: usize) -> usize {
    text.get(..byte)
        .and_then(|head| head.grapheme_indices(true).next_back())
        .map_or(0, |(i, _)| i)
}

/// End of the grapheme that starts at `byte`.
fn grapheme_after(text: &str, byte: usize) -> usize {
    text.get(byte..)
        .and_then(|tail| tail.graphemes(true).next())
        .map_or(text.len(), |g| byte + g.len())
}

/// Text plus a byte-range selection. Collapsed selection == caret.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextFieldState {
    pub text: String,
    pub selection: Range<usize>,
}

impl TextFieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let mut state = Self::new();
        state.set_text(&text.into());
        state
    }

    /// Selection clamped to the text and ordered low to high.
    fn ordered_selection(&self) -> Range<usize> {
        let len = self.text.len();
        let (a, b) = (self.selection.start.min(len), self.selection.end.min(len));
        a.min(b)..a.max(b)
    }

    fn replace(&mut self, range: Range<usize>, with: &str) {
        self.text.replace_range(range.clone(), with);
        let caret = range.start + with.len();
        self.selection = caret..caret;
    }

    /// Replaces the selection with `text` and puts the caret after it.
    pub fn insert_text(&mut self, text: &str) {
        let range = self.ordered_selection();
        self.replace(range, text);
    }

    /// Deletes the selection, or the grapheme before the caret.
    pub fn delete_backward(&mut self) {
        let mut range = self.ordered_selection();
        if range.is_empty() {
            range.start = grapheme_before(&self.text, range.end);
        }
        self.replace(range, "");
    }

    /// Replaces the whole contents, caret at the end.
    pub fn set_text(&mut self, text: &str) {
        self.selection = 0..self.text.len();
        self.insert_text(text);
    }

    /// Moves the caret by `delta` graphemes. With `extend`, the selection
    /// start stays anchored.
    pub fn move_cursor(&mut self, delta: isize, extend: bool) {
        let mut pos = self.selection.end.min(self.text.len());
        for _ in 0..delta.unsigned_abs() {
            pos = if delta < 0 {
                grapheme_before(&self.text, pos)
            } else {
                grapheme_after(&self.text, pos)
            };
        }
        if extend {
            self.selection = self.selection.start..pos;
        } else {
            self.selection = pos..pos;
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.selection = 0..0;
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Text field showing `state`'s text, or `hint` while empty.
pub fn TextField(
    modifier: Modifier,
    state: &TextFieldState,
    hint: impl Into<String>,
    on_change: Option<Rc<dyn Fn(String)>>,
) -> View {
    let hint = hint.into();
    let th = theme();
    View::new(ViewKind::TextField {
        value: state.text.clone(),
        hint: hint.clone(),
        hint_color: th.placeholder,
        color: th.on_surface,
        font_size: 16.0,
        on_change,
    })
    .modifier(modifier)
    .semantics(Semantics::new(Role::TextField).label(hint))
}

pub trait TextFieldStyle {
    fn field_font_size(self, px: f32) -> View;
    fn hint_color(self, c: Color) -> View;
}

impl TextFieldStyle for View {
    fn field_font_size(mut self, px: f32) -> View {
        if let ViewKind::TextField { font_size, .. } = &mut self.kind {
            *font_size = px;
        }
        self
    }
    fn hint_color(mut self, c: Color) -> View {
        if let ViewKind::TextField { hint_color, .. } = &mut self.kind {
            *hint_color = c;
        }
        self
    }
}
