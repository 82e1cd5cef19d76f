//! Mount/unmount sequencing for overlays that animate in and out.
//!
//! An element is mounted with its from-styles, laid out once, and only then
//! switched to its resting styles so the enter transition plays. On the way
//! out it stays mounted while its exit transition runs and is unmounted once
//! the exit duration has elapsed.

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresencePhase {
    Hidden,
    /// Mounted with the initial (from) styles.
    Entering,
    Shown,
    /// Still mounted, playing the exit transition.
    Exiting,
}

impl PresencePhase {
    pub fn next_on(self, visible: bool) -> Self {
        match (self, visible) {
            (PresencePhase::Hidden, true) | (PresencePhase::Exiting, true) => PresencePhase::Entering,
            (PresencePhase::Entering, false) | (PresencePhase::Shown, false) => PresencePhase::Exiting,
            (phase, _) => phase,
        }
    }

    /// Timer-driven step; `None` when the phase is settled.
    pub fn settle(self) -> Option<Self> {
        match self {
            PresencePhase::Entering => Some(PresencePhase::Shown),
            PresencePhase::Exiting => Some(PresencePhase::Hidden),
            _ => None,
        }
    }

    pub fn is_mounted(self) -> bool {
        self != PresencePhase::Hidden
    }

    pub fn class(self) -> &'static str {
        match self {
            PresencePhase::Shown => "presence-shown",
            PresencePhase::Entering | PresencePhase::Exiting | PresencePhase::Hidden => "presence-away",
        }
    }

    pub fn settle_step(self, exit_ms: u32) -> Option<SettleStep> {
        let target = self.settle()?;
        Some(match self {
            PresencePhase::Exiting => SettleStep::AfterDelay(exit_ms, target),
            _ => SettleStep::AfterReflow(target),
        })
    }
}

/// How a transitional phase reaches its settled phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleStep {
    /// Force a layout of the mounted from-styles, then switch.
    AfterReflow(PresencePhase),
    /// Switch once the exit transition has played.
    AfterDelay(u32, PresencePhase),
}

fn force_reflow(node: &NodeRef) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.offset_height();
    }
}

/// `node` must be attached to the element whose classes follow the phase.
#[hook]
pub fn use_presence(visible: bool, exit_ms: u32, node: NodeRef) -> PresencePhase {
    let phase = use_state(|| PresencePhase::Hidden.next_on(visible));

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                let next = phase.next_on(*visible);
                if next != *phase {
                    phase.set(next);
                }
                || ()
            },
            visible,
        );
    }

    {
        let setter = phase.setter();
        use_effect_with_deps(
            move |current: &PresencePhase| {
                let mut timeout = None;
                match current.settle_step(exit_ms) {
                    Some(SettleStep::AfterReflow(target)) => {
                        force_reflow(&node);
                        setter.set(target);
                    }
                    Some(SettleStep::AfterDelay(delay_ms, target)) => {
                        timeout = Some(Timeout::new(delay_ms, move || setter.set(target)));
                    }
                    None => {}
                }
                // Dropping the Timeout on teardown cancels a pending step.
                move || drop(timeout)
            },
            *phase,
        );
    }

    *phase
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut phase: PresencePhase) -> PresencePhase {
        while let Some(next) = phase.settle() {
            phase = next;
        }
        phase
    }

    #[test]
    fn show_enters_then_settles_shown() {
        let phase = PresencePhase::Hidden.next_on(true);
        assert_eq!(phase, PresencePhase::Entering);
        assert!(phase.is_mounted());
        assert_eq!(phase.settle(), Some(PresencePhase::Shown));
    }

    #[test]
    fn hide_keeps_mounted_until_exit_finishes() {
        let phase = PresencePhase::Shown.next_on(false);
        assert_eq!(phase, PresencePhase::Exiting);
        assert!(phase.is_mounted());
        assert_eq!(phase.settle(), Some(PresencePhase::Hidden));
        assert!(!PresencePhase::Hidden.is_mounted());
    }

    #[test]
    fn reshow_during_exit_reenters() {
        assert_eq!(PresencePhase::Exiting.next_on(true), PresencePhase::Entering);
    }

    #[test]
    fn enter_then_leave_ends_hidden() {
        let phase = PresencePhase::Hidden.next_on(true).next_on(false);
        assert_eq!(run(phase), PresencePhase::Hidden);
    }

    #[test]
    fn settled_phases_ignore_repeated_input() {
        assert_eq!(PresencePhase::Hidden.next_on(false), PresencePhase::Hidden);
        assert_eq!(PresencePhase::Shown.next_on(true), PresencePhase::Shown);
        assert_eq!(PresencePhase::Shown.settle(), None);
        assert_eq!(PresencePhase::Hidden.settle(), None);
    }

    #[test]
    fn only_exit_waits_for_the_transition() {
        assert_eq!(
            PresencePhase::Exiting.settle_step(300),
            Some(SettleStep::AfterDelay(300, PresencePhase::Hidden))
        );
        assert!(!matches!(PresencePhase::Entering.settle_step(300), Some(SettleStep::AfterDelay(..))));
    }

    #[test]
    fn entering_lays_out_from_styles_before_showing() {
        let entering = PresencePhase::Hidden.next_on(true);
        assert_eq!(entering.class(), "presence-away");
        assert_eq!(entering.settle_step(300), Some(SettleStep::AfterReflow(PresencePhase::Shown)));
        assert_eq!(PresencePhase::Shown.settle_step(300), None);
        assert_eq!(PresencePhase::Hidden.settle_step(300), None);
    }

    #[test]
    fn only_shown_uses_the_resting_styles() {
        assert_eq!(PresencePhase::Shown.class(), "presence-shown");
        assert_eq!(PresencePhase::Entering.class(), "presence-away");
        assert_eq!(PresencePhase::Exiting.class(), "presence-away");
    }
}
