use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::text::{RichText, SectionLabel};
use crate::content::{ABOUT_IMAGE, ABOUT_PARAGRAPHS};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about section-narrow">
            <div class="about-grid">
                <div class="about-intro">
                    <SectionLabel text="About Us" />
                    <Reveal>
                        <h2 class="heading-xl">
                            {"We create "}<em class="serif">{"atmospheres"}</em>{", not just buildings."}
                        </h2>
                    </Reveal>
                    <Reveal>
                        <div class="est-badge">{"Est. 2010"}<br />{"Group"}</div>
                    </Reveal>
                </div>

                <div class="about-body">
                    <Reveal class="about-text">
                        { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! {
                            <RichText text={*paragraph} class="body-serif" />
                        }) }
                    </Reveal>
                    <Reveal class="about-figure">
                        <div class="zoom-frame portrait">
                            <img src={ABOUT_IMAGE} alt="Villa Detail" loading="lazy" />
                            <div class="figure-caption">
                                <p class="caption-title">{"The Solana Villa"}</p>
                                <p class="caption-year">{"\u{a9}2024"}</p>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
