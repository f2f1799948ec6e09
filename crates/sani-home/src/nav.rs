use sani_core::ImageId;

use crate::assets;

pub const HOME: &str = "home";
pub const SERVICES: &str = "services";
pub const PRODUCTS: &str = "products";
pub const DISCOVER: &str = "discover";
pub const ACCOUNT: &str = "account";

/// One bottom-bar tab. Position in the list is the tab index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: ImageId,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        key: HOME,
        label: "Home",
        icon: assets::NAV_HOME,
    },
    NavItem {
        key: SERVICES,
        label: "Services",
        icon: assets::NAV_SERVICES,
    },
    NavItem {
        key: PRODUCTS,
        label: "Products",
        icon: assets::NAV_PRODUCTS,
    },
    NavItem {
        key: DISCOVER,
        label: "Discover",
        icon: assets::NAV_DISCOVER,
    },
    NavItem {
        key: ACCOUNT,
        label: "Account",
        icon: assets::NAV_ACCOUNT,
    },
];

pub fn index_of(items: &[NavItem], key: &str) -> Option<usize> {
    items.iter().position(|i| i.key == key)
}
