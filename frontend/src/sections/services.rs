use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::text::SectionLabel;
use crate::config::SERVICE_REVEAL_MARGIN_PX;
use crate::content::{SERVICES, SERVICES_INTRO};

/// Odd rows put the image first on wide screens.
fn image_leads(index: usize) -> bool {
    index % 2 == 1
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services dark-section">
            <div class="section-inner">
                <div class="services-header">
                    <div class="services-heading">
                        <SectionLabel text="Our Services" />
                        <h2 class="heading-xl">
                            {"Timeless Services. "}
                            <span class="serif muted">{"Singular Vision."}</span>
                        </h2>
                    </div>
                    <p class="services-intro">{ SERVICES_INTRO }</p>
                </div>

                <div class="service-list">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <Reveal
                            key={service.id}
                            class={classes!("service-row", image_leads(index).then(|| "image-leads"))}
                            margin_px={SERVICE_REVEAL_MARGIN_PX}
                        >
                            <div class="service-text">
                                <div class="service-subtitle">
                                    <span class="rule"></span>
                                    <span>{ service.subtitle }</span>
                                </div>
                                <h3 class="service-title">{ service.title }</h3>
                                <p class="service-description">{ service.description }</p>
                            </div>
                            <div class="service-image">
                                <div class="zoom-frame wide">
                                    <img src={service.image} alt={service.title} loading="lazy" />
                                    <div class="image-dim"></div>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_alternate() {
        let leads: Vec<_> = (0..SERVICES.len()).map(image_leads).collect();
        assert_eq!(leads, vec![false, true, false]);
    }
}
