//! Image identifiers. The host maps each name to a bundled asset.

use sani_core::ImageId;

pub const LOGO: ImageId = ImageId("sani_logo");
pub const BELL: ImageId = ImageId("bell");
pub const SPARKLES: ImageId = ImageId("sparkles");

pub const NAV_HOME: ImageId = ImageId("home");
pub const NAV_SERVICES: ImageId = ImageId("services");
pub const NAV_PRODUCTS: ImageId = ImageId("products");
pub const NAV_DISCOVER: ImageId = ImageId("discover");
pub const NAV_ACCOUNT: ImageId = ImageId("account");

pub const CARD_SERVICES: ImageId = ImageId("services_icon");
pub const CARD_PRODUCTS: ImageId = ImageId("products_icon");
pub const CARD_HISTORY: ImageId = ImageId("history_icon");
pub const CARD_EMERGENCY: ImageId = ImageId("emergency_icon");

pub const PRODUCT_PHOTO: ImageId = ImageId("products_1");
pub const SERVICE_PHOTO: ImageId = ImageId("products_2");
