//! Ephemeral UI state behind the navigation chrome and the image hotspots.
//!
//! Everything here is plain data so the components only hold it in `use_state`
//! and ask it for styling decisions.

use crate::config::{LOGO_DARK, LOGO_LIGHT, SCROLL_THRESHOLD};

/// True once the page has scrolled strictly past the navbar threshold.
pub fn past_scroll_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTheme {
    /// Light-on-dark over the hero video.
    Transparent,
    /// Dark-on-light once the page has scrolled.
    Opaque,
}

impl NavTheme {
    pub fn from_scrolled(scrolled: bool) -> Self {
        if scrolled {
            NavTheme::Opaque
        } else {
            NavTheme::Transparent
        }
    }

    pub fn nav_class(self) -> &'static str {
        match self {
            NavTheme::Transparent => "top-nav",
            NavTheme::Opaque => "top-nav scrolled",
        }
    }

    pub fn logo_src(self) -> &'static str {
        match self {
            NavTheme::Transparent => LOGO_LIGHT,
            NavTheme::Opaque => LOGO_DARK,
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            NavTheme::Transparent => "text-light",
            NavTheme::Opaque => "text-dark",
        }
    }

    pub fn talk_button_class(self) -> &'static str {
        match self {
            NavTheme::Transparent => "talk-button talk-button-light",
            NavTheme::Opaque => "talk-button talk-button-dark",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn observe_scroll(self, offset: f64) -> Self {
        Self {
            scrolled: past_scroll_threshold(offset),
            ..self
        }
    }

    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    /// A link inside the overlay was followed.
    pub fn close_menu(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }

    pub fn theme(&self) -> NavTheme {
        NavTheme::from_scrolled(self.scrolled)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    pub hovered: bool,
}

impl HoverState {
    pub fn pointer_enter(self) -> Self {
        Self { hovered: true }
    }

    pub fn pointer_leave(self) -> Self {
        Self { hovered: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hovered(spots: &[HoverState]) -> Vec<bool> {
        spots.iter().map(|spot| spot.hovered).collect()
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!past_scroll_threshold(0.0));
        assert!(!past_scroll_threshold(49.9));
        assert!(!past_scroll_threshold(50.0));
        assert!(past_scroll_threshold(50.1));
        assert!(past_scroll_threshold(10_000.0));
    }

    #[test]
    fn every_offset_up_to_threshold_is_not_scrolled() {
        for offset in 0..=50 {
            assert!(!NavState::default().observe_scroll(offset as f64).scrolled);
        }
        for offset in 51..=500 {
            assert!(NavState::default().observe_scroll(offset as f64).scrolled);
        }
    }

    #[test]
    fn scroll_down_and_back_swaps_theme_and_logo() {
        let state = NavState::default().observe_scroll(0.0);
        assert_eq!(state.theme(), NavTheme::Transparent);
        assert_eq!(state.theme().logo_src(), LOGO_LIGHT);

        let state = state.observe_scroll(120.0);
        assert_eq!(state.theme(), NavTheme::Opaque);
        assert_eq!(state.theme().logo_src(), LOGO_DARK);
        assert!(state.theme().nav_class().contains("scrolled"));

        let state = state.observe_scroll(10.0);
        assert_eq!(state.theme(), NavTheme::Transparent);
        assert_eq!(state.theme().logo_src(), LOGO_LIGHT);
        assert!(!state.theme().nav_class().contains("scrolled"));
    }

    #[test]
    fn double_toggle_is_a_round_trip() {
        let initial = NavState::default();
        assert_eq!(initial.toggle_menu().toggle_menu(), initial);

        let open = initial.toggle_menu();
        assert!(open.menu_open);
        assert_eq!(open.toggle_menu().toggle_menu(), open);
    }

    #[test]
    fn close_menu_always_closes() {
        let closed = NavState::default();
        assert!(!closed.close_menu().menu_open);
        assert!(!closed.toggle_menu().close_menu().menu_open);
    }

    #[test]
    fn menu_and_scroll_flags_are_independent() {
        let state = NavState::default().toggle_menu().observe_scroll(200.0);
        assert!(state.menu_open);
        assert!(state.scrolled);
        let state = state.close_menu();
        assert!(state.scrolled);
    }

    #[test]
    fn hover_enter_then_leave_is_a_no_op() {
        let hover = HoverState::default();
        assert_eq!(hover.pointer_enter().pointer_leave(), hover);
        assert!(!hover.pointer_enter().pointer_leave().hovered);
    }

    #[test]
    fn hotspots_hover_independently() {
        let mut spots = vec![HoverState::default(); 3];

        spots[0] = spots[0].pointer_enter();
        assert_eq!(hovered(&spots), vec![true, false, false]);

        spots[2] = spots[2].pointer_enter();
        assert_eq!(hovered(&spots), vec![true, false, true]);

        spots[0] = spots[0].pointer_leave();
        assert_eq!(hovered(&spots), vec![false, false, true]);

        spots[1] = spots[1].pointer_leave();
        assert_eq!(hovered(&spots), vec![false, false, true]);
    }

    #[test]
    fn logged_theme_matches_rendered_theme() {
        for scrolled in [false, true] {
            for menu_open in [false, true] {
                let state = NavState { scrolled, menu_open };
                assert_eq!(state.theme(), NavTheme::from_scrolled(scrolled));
            }
        }
    }

    #[test]
    fn themes_differ_in_every_decision() {
        let (light, dark) = (NavTheme::Transparent, NavTheme::Opaque);
        assert_ne!(light.text_class(), dark.text_class());
        assert_ne!(light.talk_button_class(), dark.talk_button_class());
        assert_ne!(light.logo_src(), dark.logo_src());
    }
}
