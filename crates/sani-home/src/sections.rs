#![allow(non_snake_case)]
//! Scrolling body of the home screen. Every size goes through the viewport
//! helpers so the design holds its proportions on any screen.

use std::rc::Rc;

use sani_core::*;
use sani_ui::textfield::TextFieldStyle;
use sani_ui::*;

use crate::assets;
use crate::content::{self, AirQuality, Feature, Promo, Shelf};

/// Brand logo; tapping it returns to the home tab.
pub fn Logo(on_click: impl Fn() + 'static) -> View {
    let vp = viewport();
    Clickable(
        Modifier::new()
            .margin_top(vp.height_percent(17.25))
            .margin_bottom(vp.height_percent(12.3)),
        "Sani",
        on_click,
    )
    .child(Image(
        Modifier::new().size(vp.width_percent(38.13), vp.moderate(42.0)),
        assets::LOGO,
    ))
}

pub fn Bell() -> View {
    let vp = viewport();
    Image(
        Modifier::new()
            .size(vp.width_percent(5.33), vp.moderate(22.0))
            .align_self(AlignSelf::FlexEnd)
            .margin_right(vp.width_percent(8.0))
            .margin_bottom(vp.height_percent(2.5)),
        assets::BELL,
    )
}

pub fn SearchBar(state: &TextFieldState, on_change: Rc<dyn Fn(String)>) -> View {
    let vp = viewport();
    let th = theme();
    Row(Modifier::new()
        .align_items(AlignItems::Center)
        .background(th.surface_variant)
        .clip_rounded(vp.moderate(20.0))
        .padding_horizontal(vp.width_percent(4.0))
        .height(vp.height_percent(6.0))
        .fill_width(0.9))
    .child((
        Image(
            Modifier::new()
                .size(vp.width_percent(8.8), vp.moderate(22.0))
                .margin_right(vp.width_percent(2.0)),
            assets::SPARKLES,
        ),
        TextField(
            Modifier::new().flex_grow(1.0),
            state,
            content::SEARCH_HINT,
            Some(on_change),
        )
        .field_font_size(vp.moderate(14.0))
        .hint_color(th.placeholder),
    ))
}

pub fn Heading() -> View {
    let vp = viewport();
    Box(Modifier::new()
        .fill_width(0.9)
        .margin_vertical(vp.height_percent(3.7)))
    .child(
        Text(content::HEADING)
            .size(vp.moderate(18.0))
            .weight(FontWeight::SEMI_BOLD)
            .color(theme().on_surface)
            .align(TextAlign::Start),
    )
}

pub fn FeatureCard(feature: &Feature) -> View {
    let vp = viewport();
    let th = theme();
    let mut m = Modifier::new()
        .background(th.surface)
        .clip_rounded(vp.moderate(16.0))
        .fill_width(0.48)
        .padding_vertical(vp.height_percent(2.5))
        .padding_horizontal(vp.width_percent(3.0))
        .margin_bottom(vp.height_percent(2.2))
        .align_items(AlignItems::Center);
    if feature.special {
        m = m.shadow(Color::BLACK, 0.4, vp.moderate(6.0), 4.0);
    }
    Column(m).child((
        Image(
            Modifier::new()
                .size(vp.width_percent(12.0), vp.moderate(40.0))
                .margin_bottom(vp.height_percent(1.0)),
            feature.icon,
        ),
        Text(feature.title)
            .size(vp.moderate(15.0))
            .weight(FontWeight::SEMI_BOLD)
            .color(th.on_surface)
            .align(TextAlign::Center)
            .modifier(Modifier::new().margin_bottom(vp.height_percent(0.7))),
        Text(feature.subtitle)
            .size(vp.moderate(12.0))
            .color(th.on_surface_muted)
            .align(TextAlign::Center),
    ))
}

/// Two-column wrap of [`FeatureCard`]s.
pub fn FeatureGrid(features: &[Feature]) -> View {
    Row(Modifier::new()
        .fill_width(0.9)
        .flex_wrap(FlexWrap::Wrap)
        .justify_content(JustifyContent::SpaceBetween))
    .child(features.iter().map(FeatureCard).collect::<Vec<_>>())
}

pub fn AqiCard(aqi: &AirQuality) -> View {
    let vp = viewport();
    let th = theme();
    Column(Modifier::new()
        .fill_width(0.9)
        .background(th.surface)
        .clip_rounded(vp.moderate(16.0))
        .padding(vp.width_percent(4.0))
        .margin_top(vp.height_percent(1.2)))
    .child((
        Text(aqi.label)
            .size(vp.moderate(12.0))
            .color(th.on_surface_muted)
            .modifier(Modifier::new().margin_bottom(vp.height_percent(0.4))),
        Text(aqi.summary())
            .size(vp.moderate(14.0))
            .color(th.on_surface)
            .modifier(Modifier::new().margin_bottom(vp.height_percent(1.0))),
        Box(Modifier::new()
            .fill_max_width()
            .height(vp.height_percent(1.2))
            .clip_rounded(vp.height_percent(1.0))
            .background(th.track))
        .semantics(Semantics::new(Role::ProgressBar).label(aqi.label))
        .child(Box(Modifier::new()
            .fill_width(aqi.level)
            .fill_max_height()
            .background(th.highlight))),
    ))
}

fn PromoButton(promo: &Promo) -> View {
    let vp = viewport();
    let th = theme();
    let (title, action) = (promo.title, promo.action);
    Clickable(
        Modifier::new()
            .align_self(AlignSelf::FlexStart)
            .background(th.button_bg)
            .clip_rounded(vp.moderate(20.0))
            .padding_vertical(vp.scale_by_height(6.0))
            .padding_horizontal(vp.moderate(14.0)),
        action,
        move || log::info!("{action:?} tapped on {title:?}"),
    )
    .child(
        Text(action)
            .size(vp.moderate(13.0))
            .weight(FontWeight::SEMI_BOLD)
            .color(th.on_button),
    )
}

/// Photo tile with the copy overlaid along its bottom edge.
pub fn PromoCard(promo: &Promo, height_percent: f32) -> View {
    let vp = viewport();
    let th = theme();
    let radius = vp.moderate(16.0);

    let mut copy = vec![
        Text(promo.title)
            .size(vp.moderate(16.0))
            .weight(FontWeight::BOLD)
            .color(th.on_surface)
            .modifier(Modifier::new().margin_bottom(vp.height_percent(0.6))),
        Text(promo.subtitle)
            .size(vp.moderate(13.0))
            .color(th.on_photo_muted)
            .modifier(Modifier::new().margin_bottom(vp.height_percent(1.2))),
    ];
    if let Some(price) = promo.price {
        copy.push(
            Row(Modifier::new().margin_bottom(vp.height_percent(1.2))).child((
                Text(format!("{} ", price.was))
                    .size(vp.moderate(14.0))
                    .color(th.placeholder)
                    .line_through(),
                Text(price.now).size(vp.moderate(14.0)).color(th.on_surface),
            )),
        );
    }
    copy.push(PromoButton(promo));

    Stack(Modifier::new()
        .size(vp.width_percent(95.0), vp.height_percent(height_percent))
        .clip_rounded(radius)
        .border(1.0, th.outline, radius)
        .background(th.surface)
        .margin_right(vp.width_percent(4.0)))
    .child((
        Image(Modifier::new().fill_max_size(), promo.photo).image_fit(ImageFit::Cover),
        Column(Modifier::new().absolute().offset(
            Some(vp.width_percent(5.3)),
            None,
            Some(vp.width_percent(5.3)),
            Some(vp.height_percent(2.5)),
        ))
        .child(copy),
    ))
}

/// Section title, "View All" link and a horizontal carousel of tiles.
pub fn ShelfSection(shelf: &Shelf) -> View {
    let vp = viewport();
    let th = theme();
    let gutter = vp.width_percent(5.3);
    Column(Modifier::new()
        .fill_max_width()
        .margin_top(vp.height_percent(3.7)))
    .child((
        Row(Modifier::new()
            .justify_content(JustifyContent::SpaceBetween)
            .padding_horizontal(gutter)
            .margin_bottom(vp.height_percent(1.5)))
        .child((
            Text(shelf.title)
                .size(vp.moderate(16.0))
                .weight(FontWeight::SEMI_BOLD)
                .color(th.on_surface),
            Text(content::VIEW_ALL)
                .size(vp.moderate(14.0))
                .color(th.accent),
        )),
        ScrollRow(Modifier::new().padding_horizontal(gutter)).child(
            shelf
                .tiles
                .iter()
                .map(|p| PromoCard(p, shelf.tile_height_percent))
                .collect::<Vec<_>>(),
        ),
    ))
}
