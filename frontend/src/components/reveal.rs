use log::{debug, warn};
use yew::prelude::*;

use crate::scroll::ScrollListener;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealVariant {
    /// 60px rise with a long ease-out.
    #[default]
    FadeUp,
    /// 20px slide in from the left.
    SlideRight,
    /// 40px rise.
    Rise,
}

impl RevealVariant {
    fn class(self) -> &'static str {
        match self {
            RevealVariant::FadeUp => "reveal reveal-fade-up",
            RevealVariant::SlideRight => "reveal reveal-slide-right",
            RevealVariant::Rise => "reveal reveal-rise",
        }
    }
}

/// Whether an element's box overlaps the viewport shrunk by `margin` at the bottom.
pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin && bottom > 0.0
}

pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

fn check(node: &NodeRef, margin: f64) -> bool {
    let Some(element) = node.cast::<web_sys::Element>() else {
        return false;
    };
    let Some(viewport_height) = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
    else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    in_viewport(rect.top(), rect.bottom(), viewport_height, margin)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: RevealVariant,
    #[prop_or_default]
    pub delay_ms: u32,
    /// Distance above the viewport bottom the block must cross to reveal.
    #[prop_or_default]
    pub margin_px: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Wraps content that animates in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let margin = props.margin_px;
        let deps = *revealed;
        use_effect_with_deps(
            move |already: &bool| {
                let mut listener = None;
                if !*already {
                    if check(&node, margin) {
                        revealed.set(true);
                    } else {
                        listener = ScrollListener::new(move || {
                            if check(&node, margin) {
                                debug!("Reveal block entered viewport");
                                revealed.set(true);
                            }
                        })
                        .map_err(|e| warn!("Failed to register reveal listener: {:?}", e))
                        .ok();
                    }
                }
                move || drop(listener)
            },
            deps,
        );
    }

    let style = format!("transition-delay: {}ms;", props.delay_ms);

    html! {
        <div
            ref={node}
            class={classes!(props.variant.class(), (*revealed).then(|| "revealed"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_the_fold_is_not_in_view() {
        assert!(!in_viewport(900.0, 1300.0, 800.0, 100.0));
        assert!(!in_viewport(750.0, 1000.0, 800.0, 100.0));
    }

    #[test]
    fn intersecting_block_is_in_view() {
        assert!(in_viewport(300.0, 700.0, 800.0, 100.0));
        assert!(in_viewport(-200.0, 100.0, 800.0, 100.0));
    }

    #[test]
    fn scrolled_past_is_not_in_view() {
        assert!(!in_viewport(-600.0, -10.0, 800.0, 100.0));
    }

    #[test]
    fn margin_holds_back_blocks_near_the_bottom() {
        assert!(in_viewport(750.0, 1000.0, 800.0, 0.0));
        assert!(!in_viewport(750.0, 1000.0, 800.0, 100.0));
        assert!(!in_viewport(800.0, 1000.0, 800.0, 0.0));
    }

    #[test]
    fn stagger_grows_linearly() {
        let delays: Vec<_> = (0..4).map(|i| stagger_delay_ms(i, 100)).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
    }
}
