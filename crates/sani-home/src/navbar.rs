#![allow(non_snake_case)]

use sani_core::*;
use sani_ui::*;

use crate::nav::NavItem;
use crate::tabs::{IndicatorGeometry, TabBar, icon_scale_for, tint_for};

/// Semantics label of the sliding pill.
pub const INDICATOR_LABEL: &str = "Active tab indicator";

/// Bar pinned to the bottom edge: the sliding pill plus one tab per item.
/// Colors, icon scale and pill offset are read from `tabs` as they are at
/// this frame.
pub fn BottomNav(tabs: &TabBar, on_select: impl Fn(&'static str) + Clone + 'static) -> View {
    let vp = viewport();
    let th = theme();
    let geom = IndicatorGeometry::new(vp, tabs.items().len());

    let pill = Box(Modifier::new()
        .absolute()
        .offset_top(vp.height_percent(0.6))
        .offset_left(geom.offset(tabs.indicator_position()))
        .size(geom.width, vp.height_percent(0.5))
        .clip_rounded(vp.height_percent(0.3))
        .background(th.nav_active))
    .semantics(Semantics::new(Role::Container).label(INDICATOR_LABEL));

    let items: Vec<View> = tabs
        .items()
        .iter()
        .map(|item| {
            let progress = tabs.progress(item.key).unwrap_or(0.0);
            let selected = item.key == tabs.active_key();
            NavTab(item, progress, selected, on_select.clone())
        })
        .collect();

    Box(Modifier::new().absolute().offset_bottom(0.0).fill_max_width()).child(
        Row(Modifier::new()
            .fill_max_width()
            .height(vp.height_percent(12.19))
            .justify_content(JustifyContent::SpaceAround)
            .align_items(AlignItems::Center)
            .background(th.background)
            .border_top(1.0, th.divider))
        .child((pill, items)),
    )
}

fn NavTab(
    item: &NavItem,
    progress: f32,
    selected: bool,
    on_select: impl Fn(&'static str) + 'static,
) -> View {
    let vp = viewport();
    let th = theme();
    let tint = tint_for(progress, th.nav_inactive, th.nav_active);
    let icon = vp.width_percent(6.93);
    let key = item.key;

    Clickable(
        Modifier::new()
            .align_items(AlignItems::Center)
            .press_alpha(0.85),
        item.label,
        move || on_select(key),
    )
    .semantics(
        Semantics::new(Role::Tab)
            .label(item.label)
            .selected(selected),
    )
    .child((
        Image(
            Modifier::new()
                .size(icon, icon)
                .margin_bottom(vp.height_percent(0.4))
                .scale(icon_scale_for(progress)),
            item.icon,
        )
        .image_tint(tint),
        Text(item.label).size(vp.moderate(12.0)).color(tint),
    ))
}

#[cfg(test)]
mod tests {
    use sani_core::ManualClock;

    use super::*;
    use crate::nav::{DISCOVER, HOME, NAV_ITEMS};
    use crate::tabs::TRANSITION;

    #[test]
    fn test_bottom_nav_outline_initial() {
        let bar = TabBar::with_defaults(&NAV_ITEMS, HOME).unwrap();
        insta::assert_snapshot!(outline(&BottomNav(&bar, |_| {})), @r#"
        Box
          Row
            Box
            Box [tab "Home" selected]
              Image home tint=#FFFFFF
              Text "Home"
            Box [tab "Services"]
              Image services tint=#888888
              Text "Services"
            Box [tab "Products"]
              Image products tint=#888888
              Text "Products"
            Box [tab "Discover"]
              Image discover tint=#888888
              Text "Discover"
            Box [tab "Account"]
              Image account tint=#888888
              Text "Account"
        "#);
    }

    #[test]
    fn test_selected_flag_moves_before_visuals() {
        let clock = ManualClock::default();
        let mut bar = TabBar::with_defaults(&NAV_ITEMS, HOME).unwrap();
        bar.select(DISCOVER, clock.now());

        let v = BottomNav(&bar, |_| {});
        let discover = find_by_label(&v, "Discover").unwrap();
        assert!(discover.semantics.as_ref().unwrap().selected);
        // No frame has run yet, so the icon still has its inactive tint.
        assert!(matches!(
            discover.children[0].kind,
            ViewKind::Image { tint: Some(c), .. } if c == theme().nav_inactive
        ));

        clock.advance(TRANSITION);
        bar.tick(clock.now());
        let v = BottomNav(&bar, |_| {});
        let discover = find_by_label(&v, "Discover").unwrap();
        assert!(matches!(
            discover.children[0].kind,
            ViewKind::Image { tint: Some(c), .. } if c == theme().nav_active
        ));
    }
}
