use yew::prelude::*;

use crate::components::reveal::{stagger_delay_ms, Reveal, RevealVariant};
use crate::components::text::SectionLabel;
use crate::config::STAGGER_STEP_MS;
use crate::content::PROJECTS;

#[function_component(Projects)]
pub fn projects() -> Html {
    html! {
        <section id="projects" class="projects section-narrow">
            <div class="projects-header">
                <div>
                    <SectionLabel text="Featured Projects" />
                    <h2 class="heading-xl">{"Selected Works"}</h2>
                </div>
                <div class="carousel-buttons desktop-only">
                    <button class="round-button" aria-label="Previous">
                        <span class="arrow arrow-back">{"\u{2192}"}</span>
                    </button>
                    <button class="round-button" aria-label="Next">
                        <span class="arrow">{"\u{2192}"}</span>
                    </button>
                </div>
            </div>

            <div class="project-grid">
                { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                    <Reveal
                        key={project.id}
                        variant={RevealVariant::Rise}
                        delay_ms={stagger_delay_ms(index, STAGGER_STEP_MS)}
                        class="project-card"
                    >
                        <div class="zoom-frame tall grayscale-until-hover">
                            <img src={project.image} alt={project.title} loading="lazy" />
                            <div class="year-badge">{ project.year }</div>
                        </div>
                        <h3 class="project-title">{ project.title }</h3>
                        <div class="project-meta">
                            <span>{ project.location }</span>
                            <span>{ project.specs }</span>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
