use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::text::RichText;
use crate::config::QUOTE_GLYPH;
use crate::content::{Founder, FOUNDERS};

#[derive(Properties, PartialEq)]
struct FounderNoteProps {
    founder: Founder,
}

#[function_component(FounderNote)]
fn founder_note(props: &FounderNoteProps) -> Html {
    let founder = props.founder;

    let portrait = html! {
        <div class={classes!("founder-portrait", (!founder.portrait_first).then(|| "portrait-offset"))}>
            <div class="zoom-frame tall grayscale-until-hover">
                <img src={founder.portrait} alt={founder.name} loading="lazy" />
            </div>
        </div>
    };

    let note = html! {
        <div class="founder-note">
            <div class="note-card">
                <span class="quote-mark quote-open">
                    <img src={QUOTE_GLYPH} alt="" />
                </span>
                <h3 class="founder-name">{ founder.name }</h3>
                <div class="note-body">
                    { for founder.paragraphs.iter().map(|paragraph| html! {
                        <RichText text={*paragraph} />
                    }) }
                </div>
                <span class="quote-mark quote-close">
                    <img src={QUOTE_GLYPH} alt="" />
                </span>
            </div>
        </div>
    };

    // Source order keeps the portrait first on narrow screens; CSS swaps it on wide ones.
    html! {
        <Reveal class={classes!("founder-row", (!founder.portrait_first).then(|| "note-leads"))}>
            { portrait }
            { note }
        </Reveal>
    }
}

#[function_component(Founders)]
pub fn founders() -> Html {
    html! {
        <section class="founders section-narrow">
            <div class="founders-header">
                <h2 class="heading-xl">{"Founder's Note"}</h2>
            </div>
            { for FOUNDERS.iter().map(|founder| html! {
                <FounderNote key={founder.name} founder={*founder} />
            }) }
        </section>
    }
}
