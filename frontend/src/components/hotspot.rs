use log::debug;
use yew::prelude::*;

use crate::config::HOTSPOT_EXIT_MS;
use crate::content::Hotspot;
use crate::presence::use_presence;
use crate::view_state::HoverState;

#[derive(Properties, PartialEq)]
pub struct HotspotMarkerProps {
    pub spot: Hotspot,
}

/// Pulsing marker that shows an information card while hovered.
#[function_component(HotspotMarker)]
pub fn hotspot_marker(props: &HotspotMarkerProps) -> Html {
    let hover = use_state_eq(HoverState::default);
    let card_ref = use_node_ref();
    let card = use_presence(hover.hovered, HOTSPOT_EXIT_MS, card_ref.clone());
    let spot = props.spot;

    let on_enter = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Hotspot '{}' hovered", spot.title);
            hover.set(hover.pointer_enter());
        })
    };
    let on_leave = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set(hover.pointer_leave()))
    };

    html! {
        <div
            class="hotspot"
            style={format!("top: {}%; left: {}%;", spot.top, spot.left)}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            <div class="hotspot-dot">
                <span class="hotspot-ping"></span>
                <span class="hotspot-core"></span>
            </div>
            {
                if card.is_mounted() {
                    html! {
                        <div ref={card_ref} class={classes!("hotspot-card", card.class())}>
                            <p class="hotspot-title">{ spot.title }</p>
                            <p class="hotspot-detail">{ spot.detail }</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
