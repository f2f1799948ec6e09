//! Static copy shown on the home screen. There is no data source behind it.

use sani_core::ImageId;

use crate::assets;

pub const SEARCH_HINT: &str = "Search or Request Help...";
pub const HEADING: &str = "How May We Elevate Your Space?";
pub const VIEW_ALL: &str = "View All";

/// Entry of the 2×2 card grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: ImageId,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Raised with a drop shadow.
    pub special: bool,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: assets::CARD_SERVICES,
        title: "Services",
        subtitle: "Specialized environmental care for refined living",
        special: false,
    },
    Feature {
        icon: assets::CARD_PRODUCTS,
        title: "Products",
        subtitle: "Premium-grade wellness products for modern homes.",
        special: false,
    },
    Feature {
        icon: assets::CARD_HISTORY,
        title: "My History",
        subtitle: "Review your past bookings and purchases.",
        special: false,
    },
    Feature {
        icon: assets::CARD_EMERGENCY,
        title: "Emergency Booking",
        subtitle: "Need immediate assistance? Request a service now",
        special: true,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AirQuality {
    pub label: &'static str,
    pub status: &'static str,
    pub index: u32,
    /// Meter fill in [0, 1].
    pub level: f32,
}

impl AirQuality {
    pub fn summary(&self) -> String {
        format!("{} ({})", self.status, self.index)
    }
}

pub const AIR_QUALITY: AirQuality = AirQuality {
    label: "AQI",
    status: "Moderate",
    index: 148,
    level: 0.5,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Price {
    pub was: &'static str,
    pub now: &'static str,
}

/// Photo tile in a horizontal carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Promo {
    pub photo: ImageId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub price: Option<Price>,
    pub action: &'static str,
}

/// A titled horizontal carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shelf {
    pub title: &'static str,
    /// Tile height as a percentage of the viewport height.
    pub tile_height_percent: f32,
    pub tiles: &'static [Promo],
}

const AIR_PURIFIER: Promo = Promo {
    photo: assets::PRODUCT_PHOTO,
    title: "TPA X8 PRO",
    subtitle: "Engineered for superior air purification performance.",
    price: Some(Price {
        was: "AED 5100.00",
        now: "AED 4999.00",
    }),
    action: "Add to Cart",
};

const AC_DISINFECTION: Promo = Promo {
    photo: assets::SERVICE_PHOTO,
    title: "AC Quarterly Disinfection",
    subtitle: "Fresh indoor air through luxury-grade disinfection care.",
    price: None,
    action: "Book Now",
};

pub const FEATURED_PRODUCTS: Shelf = Shelf {
    title: "Featured Products",
    tile_height_percent: 33.14,
    tiles: &[AIR_PURIFIER, AIR_PURIFIER, AIR_PURIFIER],
};

pub const FEATURED_SERVICES: Shelf = Shelf {
    title: "Featured Services",
    tile_height_percent: 29.45,
    tiles: &[AC_DISINFECTION, AC_DISINFECTION],
};
