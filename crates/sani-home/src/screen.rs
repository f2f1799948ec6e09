use std::cell::{Ref, RefCell};
use std::rc::Rc;

use sani_core::*;
use sani_ui::*;

use crate::config::HomeConfig;
use crate::content::{AIR_QUALITY, FEATURED_PRODUCTS, FEATURED_SERVICES, FEATURES};
use crate::error::HomeError;
use crate::nav::{HOME, NAV_ITEMS};
use crate::navbar::BottomNav;
use crate::sections::*;
use crate::tabs::{Selection, TabBar};

/// The home screen component. Owns its tab state and search text; both are
/// shared only with the tap callbacks of the views it builds.
pub struct HomeScreen {
    viewport: Viewport,
    theme: Theme,
    tabs: Rc<RefCell<TabBar>>,
    search: Rc<RefCell<TextFieldState>>,
    clock: Rc<dyn Clock>,
}

impl HomeScreen {
    pub fn new(config: &HomeConfig, clock: Rc<dyn Clock>) -> Result<Self, HomeError> {
        config.validate()?;
        let tabs = TabBar::new(&NAV_ITEMS, &config.initial_tab, config.animation_spec())?;
        let viewport = config.viewport();
        log::info!(
            "home screen: viewport {}x{}, initial tab {:?}",
            viewport.width,
            viewport.height,
            tabs.active_key()
        );
        Ok(Self {
            viewport,
            theme: Theme::default(),
            tabs: Rc::new(RefCell::new(tabs)),
            search: Rc::new(RefCell::new(TextFieldState::new())),
            clock,
        })
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn tabs(&self) -> Ref<'_, TabBar> {
        self.tabs.borrow()
    }

    pub fn search_text(&self) -> String {
        self.search.borrow().text.clone()
    }

    /// Key input for the search field: typed text replaces the selection.
    pub fn type_search(&self, text: &str) {
        self.search.borrow_mut().insert_text(text);
    }

    pub fn search_backspace(&self) {
        self.search.borrow_mut().delete_backward();
    }

    /// Arrow keys; `extend` is held shift.
    pub fn move_search_cursor(&self, delta: isize, extend: bool) {
        self.search.borrow_mut().move_cursor(delta, extend);
    }

    /// Same path a tap on a tab takes.
    pub fn press(&self, key: &str) -> Selection {
        let now = self.clock.now();
        self.tabs.borrow_mut().select(key, now)
    }

    /// Advances running animations. The host keeps repainting while this
    /// returns `true`.
    pub fn frame(&self) -> bool {
        let now = self.clock.now();
        self.tabs.borrow_mut().tick(now)
    }

    /// Builds the tree for the current frame.
    pub fn view(&self) -> View {
        with_theme(self.theme, || with_viewport(self.viewport, || self.compose()))
    }

    fn select_handler(&self) -> impl Fn(&'static str) + Clone + 'static {
        let tabs = self.tabs.clone();
        let clock = self.clock.clone();
        move |key| {
            let now = clock.now();
            tabs.borrow_mut().select(key, now);
        }
    }

    fn compose(&self) -> View {
        let vp = viewport();
        let th = theme();
        let select = self.select_handler();

        let on_search: Rc<dyn Fn(String)> = {
            let search = self.search.clone();
            Rc::new(move |text: String| search.borrow_mut().set_text(&text))
        };

        let body = ScrollColumn(
            Modifier::new()
                .fill_max_size()
                .align_items(AlignItems::Center)
                .padding_bottom(vp.height_percent(18.0)),
        )
        .child((
            Logo({
                let select = select.clone();
                move || select(HOME)
            }),
            Bell(),
            SearchBar(&self.search.borrow(), on_search),
            Heading(),
            FeatureGrid(&FEATURES),
            AqiCard(&AIR_QUALITY),
            ShelfSection(&FEATURED_PRODUCTS),
            ShelfSection(&FEATURED_SERVICES),
        ));

        let nav = BottomNav(&self.tabs.borrow(), select);

        Surface(
            Modifier::new().fill_max_size().background(th.background),
            Stack(Modifier::new().fill_max_size()).child((body, nav)),
        )
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::nav::*;
    use crate::navbar::INDICATOR_LABEL;
    use crate::tabs::{ACTIVE_ICON_SCALE, TRANSITION};

    fn screen(config: HomeConfig) -> (HomeScreen, Rc<ManualClock>) {
        let clock = Rc::new(ManualClock::default());
        let s = HomeScreen::new(&config, clock.clone()).unwrap();
        (s, clock)
    }

    fn tab_visuals(v: &View, label: &str) -> (bool, Option<Color>, f32, Option<Color>) {
        let tab = find_by_label(v, label).expect("tab present");
        let selected = tab.semantics.as_ref().is_some_and(|s| s.selected);
        let (icon, text) = (&tab.children[0], &tab.children[1]);
        let tint = match icon.kind {
            ViewKind::Image { tint, .. } => tint,
            _ => None,
        };
        let scale = icon.modifier.transform.map_or(1.0, |t| t.scale_x);
        let text_color = match text.kind {
            ViewKind::Text { color, .. } => Some(color),
            _ => None,
        };
        (selected, tint, scale, text_color)
    }

    fn pill_left(v: &View) -> f32 {
        find_by_label(v, INDICATOR_LABEL)
            .and_then(|p| p.modifier.offset_left)
            .expect("pill present")
    }

    fn count_labelled(v: &View, label: &str) -> usize {
        let mut n = 0;
        v.walk(&mut |c| {
            if c.label() == Some(label) {
                n += 1;
            }
        });
        n
    }

    #[test]
    fn test_tree_has_all_sections() {
        let (s, _) = screen(HomeConfig::default());
        let v = s.view();

        for item in NAV_ITEMS {
            assert!(find_by_label(&v, item.label).is_some(), "{}", item.label);
        }
        for title in ["Services", "Products", "My History", "Emergency Booking"] {
            assert!(v.find(&|c| c.text() == Some(title)).is_some(), "{title}");
        }
        assert_eq!(count_labelled(&v, "Add to Cart"), 3);
        assert_eq!(count_labelled(&v, "Book Now"), 2);
        assert!(v.find(&|c| c.text() == Some("Moderate (148)")).is_some());
        assert!(find_by_label(&v, "Search or Request Help...").is_some());
    }

    #[test]
    fn test_only_emergency_card_is_raised() {
        let (s, _) = screen(HomeConfig::default());
        let v = s.view();
        let mut raised = Vec::new();
        v.walk(&mut |c| {
            if c.modifier.shadow.is_some()
                && let Some(title) = c.children.get(1).and_then(|t| t.text())
            {
                raised.push(title.to_string());
            }
        });
        assert_eq!(raised, ["Emergency Booking"]);
    }

    #[test]
    fn test_tap_switches_tab_and_settles() {
        let (s, clock) = screen(HomeConfig::default());
        assert!(click_by_label(&s.view(), "Services"));
        assert_eq!(s.tabs().active_key(), SERVICES);

        clock.advance(TRANSITION);
        assert!(!s.frame());

        let v = s.view();
        let th = Theme::default();
        let (selected, tint, scale, text) = tab_visuals(&v, "Services");
        assert!(selected);
        assert_eq!(tint, Some(th.nav_active));
        assert_eq!(text, Some(th.nav_active));
        assert!((scale - ACTIVE_ICON_SCALE).abs() < 1e-5);

        let (selected, tint, scale, _) = tab_visuals(&v, "Home");
        assert!(!selected);
        assert_eq!(tint, Some(th.nav_inactive));
        assert_eq!(scale, 1.0);

        // 375 / 5 = 75 per tab; pill is 37.5 wide.
        assert!((pill_left(&v) - 93.75).abs() < 1e-3);
    }

    #[test]
    fn test_pill_moves_between_frames() {
        let (s, clock) = screen(HomeConfig {
            easing: crate::config::EasingName::Linear,
            ..HomeConfig::default()
        });
        let start = pill_left(&s.view());
        s.press(ACCOUNT);

        clock.advance(Duration::from_millis(120));
        assert!(s.frame());
        let mid = pill_left(&s.view());

        clock.advance(Duration::from_millis(120));
        assert!(!s.frame());
        let end = pill_left(&s.view());

        assert!(start < mid && mid < end);
        assert!((mid - (start + end) / 2.0).abs() < 1e-2);
    }

    #[test]
    fn test_logo_tap_returns_home() {
        let (s, clock) = screen(HomeConfig {
            initial_tab: DISCOVER.into(),
            ..HomeConfig::default()
        });
        assert_eq!(s.tabs().active_key(), DISCOVER);
        assert!(click_by_label(&s.view(), "Sani"));
        clock.advance(TRANSITION);
        s.frame();
        assert_eq!(s.tabs().active_key(), HOME);
        assert_eq!(s.tabs().progress(HOME), Some(1.0));
        assert_eq!(s.tabs().progress_sum(), 1.0);
    }

    #[test]
    fn test_tapping_active_tab_starts_nothing() {
        let (s, _) = screen(HomeConfig::default());
        assert!(click_by_label(&s.view(), "Home"));
        assert!(s.tabs().is_settled());
        assert_eq!(s.press(HOME), Selection::Unchanged);
        assert!(!s.frame());
    }

    #[test]
    fn test_search_text_is_stored() {
        let (s, _) = screen(HomeConfig::default());
        let v = s.view();
        let field = find_by_label(&v, "Search or Request Help...").unwrap();
        let ViewKind::TextField {
            on_change: Some(cb),
            ..
        } = &field.kind
        else {
            panic!("expected text field");
        };
        cb("air purifier".into());
        assert_eq!(s.search_text(), "air purifier");
        let v = s.view();
        let field = find_by_label(&v, "Search or Request Help...").unwrap();
        assert!(matches!(&field.kind, ViewKind::TextField { value, .. } if value == "air purifier"));
    }

    #[test]
    fn test_search_key_input_edits_in_place() {
        let (s, _) = screen(HomeConfig::default());
        s.type_search("air purifer");
        s.move_search_cursor(-2, false);
        s.type_search("i");
        assert_eq!(s.search_text(), "air purifier");

        s.move_search_cursor(-9, true);
        s.search_backspace();
        assert_eq!(s.search_text(), "aer");

        // A full replacement from the host keeps the caret at the end.
        let v = s.view();
        let field = find_by_label(&v, "Search or Request Help...").unwrap();
        if let ViewKind::TextField {
            on_change: Some(cb),
            ..
        } = &field.kind
        {
            cb("filters".into());
        }
        s.search_backspace();
        assert_eq!(s.search_text(), "filter");
    }

    #[test]
    fn test_sizes_follow_viewport() {
        let (small, _) = screen(HomeConfig::default());
        let (large, _) = screen(HomeConfig {
            viewport: crate::config::ViewportConfig {
                width: 750.0,
                height: 1624.0,
            },
            ..HomeConfig::default()
        });
        let logo_w = |s: &HomeScreen| {
            let v = s.view();
            find_by_label(&v, "sani_logo")
                .and_then(|l| l.modifier.size)
                .map(|sz| sz.width)
                .unwrap()
        };
        assert!((logo_w(&small) - 143.0).abs() < 0.1);
        assert!((logo_w(&large) - 2.0 * logo_w(&small)).abs() < 0.1);
        assert_eq!(large.viewport().width, 750.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let clock: Rc<dyn Clock> = Rc::new(ManualClock::default());
        let bad = HomeConfig {
            transition_ms: 0,
            ..HomeConfig::default()
        };
        assert!(matches!(
            HomeScreen::new(&bad, clock),
            Err(HomeError::Config(_))
        ));
    }
}
