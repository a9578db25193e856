//! Default values applied when `site.json` omits a key.
//!
//! # Design
//! - Centralize defaults so the document and `SiteConfig::default` agree.
//! - Keep timer values in milliseconds to match the browser timer APIs.

/// Brand name shown in the navigation bar, splash screen and footer.
pub const BRAND: &str = "CareerCoach";
/// Locale used when nothing else selects one.
pub const DEFAULT_LOCALE: &str = "en";
/// Locales shipped with compiled-in translation bundles.
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "pt"];
/// Expert cards rendered per page.
pub const EXPERTS_PAGE_SIZE: usize = 3;
/// Delay between automatic testimonial advances.
pub const TESTIMONIAL_INTERVAL_MS: u32 = 5_000;
/// How long the startup splash stays on screen.
pub const SPLASH_MS: u32 = 2_000;
/// Debounce window for search inputs.
pub const SEARCH_DEBOUNCE_MS: u32 = 200;
