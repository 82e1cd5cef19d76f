use yew::prelude::*;

use crate::config::HERO_VIDEO;
use crate::content::{HERO_CLOSER, HERO_TAGLINE};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-background">
                <video class="hero-video" autoplay=true loop=true muted=true playsinline=true>
                    <source src={HERO_VIDEO} type="video/mp4" />
                </video>
                <div class="hero-gradient"></div>
            </div>

            <div class="hero-footer">
                <div class="hero-copy">
                    <p>
                        <span class="hero-tagline">{ HERO_TAGLINE }</span>
                        <br class="desktop-only" />
                        { HERO_CLOSER }
                    </p>
                </div>
                <a href="#about" class="scroll-cue">
                    {"SCROLL DOWN"}
                    <span class="arrow arrow-down">{"\u{2192}"}</span>
                </a>
            </div>
        </section>
    }
}
