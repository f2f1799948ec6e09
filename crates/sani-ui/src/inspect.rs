//! Debug views of a built tree: an indented outline for logs and snapshot
//! tests, and label-based lookup so taps can be simulated without a
//! rendering surface.

use std::fmt::Write;

use sani_core::*;

/// Renders `view` as one line per node, children indented by two spaces.
pub fn outline(view: &View) -> String {
    let mut out = String::new();
    write_node(&mut out, view, 0);
    out.truncate(out.trim_end().len());
    out
}

fn write_node(out: &mut String, v: &View, depth: usize) {
    let _ = write!(out, "{:indent$}", "", indent = depth * 2);
    match &v.kind {
        ViewKind::Surface => out.push_str("Surface"),
        ViewKind::Box => out.push_str("Box"),
        ViewKind::Row => out.push_str("Row"),
        ViewKind::Column => out.push_str("Column"),
        ViewKind::Stack => out.push_str("Stack"),
        ViewKind::ScrollV => out.push_str("ScrollV"),
        ViewKind::ScrollH { .. } => out.push_str("ScrollH"),
        ViewKind::Text { text, .. } => {
            let _ = write!(out, "Text {text:?}");
        }
        ViewKind::Image { id, tint, .. } => {
            let _ = write!(out, "Image {}", id.name());
            if let Some(t) = tint {
                let _ = write!(out, " tint={}", t.to_hex());
            }
        }
        ViewKind::TextField { hint, value, .. } => {
            let _ = write!(out, "TextField hint={hint:?} value={value:?}");
        }
    }
    if let Some(s) = &v.semantics {
        let label = s.label.as_deref().unwrap_or("");
        match s.role {
            Role::Button => {
                let _ = write!(out, " [button {label:?}]");
            }
            Role::Tab => {
                let _ = write!(out, " [tab {label:?}{}]", if s.selected { " selected" } else { "" });
            }
            _ => {}
        }
    }
    out.push('\n');
    for c in &v.children {
        write_node(out, c, depth + 1);
    }
}

/// First node (pre-order) whose semantics label is `label`.
pub fn find_by_label<'a>(view: &'a View, label: &str) -> Option<&'a View> {
    view.find(&|v| v.label() == Some(label))
}

/// Invokes the click handler of the first clickable node labelled `label`.
/// Returns `false` when there is no such node.
pub fn click_by_label(view: &View, label: &str) -> bool {
    let hit = view.find(&|v| v.modifier.on_click.is_some() && v.label() == Some(label));
    match hit.and_then(|v| v.modifier.on_click.clone()) {
        Some(cb) => {
            log::debug!("click {label:?}");
            cb();
            true
        }
        None => {
            log::debug!("no clickable labelled {label:?}");
            false
        }
    }
}
