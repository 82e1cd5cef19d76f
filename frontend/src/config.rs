use log::Level;

/// Vertical scroll offset past which the navbar switches to its opaque treatment.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub const LOGO_LIGHT: &str = "/pictures/viyalogonew1.png";
pub const LOGO_DARK: &str = "/pictures/viyablacknew.png";
pub const FAVICON: &str = "/pictures/viyalogotab.png";
pub const HERO_VIDEO: &str = "/videos/viya.mp4";
pub const QUOTE_GLYPH: &str = "/pictures/quote1.svg";

// Exit transition lengths, kept in sync with the CSS durations.
pub const MENU_EXIT_MS: u32 = 300;
pub const HOTSPOT_EXIT_MS: u32 = 200;

/// Service rows reveal only once they are this far above the viewport bottom.
pub const SERVICE_REVEAL_MARGIN_PX: f64 = 100.0;
pub const STAGGER_STEP_MS: u32 = 100;

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://www.viyaaestates.com"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Absolute URL for a site-relative asset path.
pub fn absolute_url(path: &str) -> String {
    format!("{}/{}", get_site_url(), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_joins_without_double_slash() {
        let url = absolute_url("/pictures/viyalogonew1.png");
        assert!(url.starts_with(get_site_url()));
        assert!(url.ends_with("/pictures/viyalogonew1.png"));
        assert!(!url.contains("//pictures"));
    }

    #[test]
    fn logo_variants_differ() {
        assert_ne!(LOGO_LIGHT, LOGO_DARK);
    }
}
