use yew::prelude::*;

use crate::components::hotspot::HotspotMarker;
use crate::components::reveal::{stagger_delay_ms, Reveal, RevealVariant};
use crate::components::text::SectionLabel;
use crate::config::STAGGER_STEP_MS;
use crate::content::{PILLARS, PILLARS_IMAGE, PILLARS_QUOTE, PILLAR_HOTSPOTS};

/// "01", "02", ... for the pillar list.
fn ordinal(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[function_component(Pillars)]
pub fn pillars() -> Html {
    html! {
        <section id="edge" class="pillars">
            <div class="section-inner pillars-grid">
                <div>
                    <SectionLabel text="The Viyaa Edge" />
                    <h2 class="heading-xxl">
                        {"Built on Four "}<br />
                        <span class="serif">{"Immovable Pillars."}</span>
                    </h2>
                    <div class="pillar-list">
                        { for PILLARS.iter().enumerate().map(|(index, pillar)| html! {
                            <Reveal
                                key={pillar.title}
                                variant={RevealVariant::SlideRight}
                                delay_ms={stagger_delay_ms(index, STAGGER_STEP_MS)}
                                class="pillar"
                            >
                                <div class="pillar-number">{ ordinal(index) }</div>
                                <div>
                                    <h4 class="pillar-title">{ pillar.title }</h4>
                                    <p class="pillar-description">{ pillar.description }</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>

                <div class="pillars-figure">
                    <div class="hotspot-frame">
                        <img src={PILLARS_IMAGE} alt="Modern Interior" loading="lazy" />
                        { for PILLAR_HOTSPOTS.iter().map(|spot| html! {
                            <HotspotMarker key={spot.title} spot={*spot} />
                        }) }
                    </div>
                    <div class="quote-card desktop-only">
                        <p class="quote-text">{ PILLARS_QUOTE }</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
