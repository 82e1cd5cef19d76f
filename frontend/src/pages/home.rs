use log::info;
use yew::prelude::*;

use crate::components::nav::Nav;
use crate::sections::{
    about::About, footer::Footer, founders::Founders, hero::Hero, pillars::Pillars,
    projects::Projects, services::Services,
};

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        move |_| {
            info!("Home page mounted");
            || ()
        },
        (),
    );

    html! {
        <div class="site">
            <style>
                {r#"
                    .reveal {
                        transition: opacity 0.8s cubic-bezier(0.22, 1, 0.36, 1), transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    .reveal:not(.revealed) {
                        opacity: 0;
                    }
                    .reveal-fade-up:not(.revealed) {
                        transform: translateY(60px);
                    }
                    .reveal-slide-right:not(.revealed) {
                        transform: translateX(-20px);
                    }
                    .reveal-rise:not(.revealed) {
                        transform: translateY(40px);
                    }
                    .hotspot {
                        position: absolute;
                        z-index: 20;
                        cursor: pointer;
                    }
                    .hotspot-dot {
                        position: relative;
                        width: 1rem;
                        height: 1rem;
                    }
                    .hotspot-ping,
                    .hotspot-core {
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        background: #fff;
                    }
                    .hotspot-ping {
                        opacity: 0.75;
                        animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }
                    .hotspot-core {
                        border: 1px solid #a8a29e;
                    }
                    @keyframes ping {
                        75%, 100% { transform: scale(2); opacity: 0; }
                    }
                    .hotspot-card {
                        position: absolute;
                        top: 1.5rem;
                        left: 50%;
                        width: 16rem;
                        padding: 1rem;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(12px);
                        border: 1px solid #f5f5f4;
                        border-radius: 2px;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        pointer-events: none;
                        transition: opacity 0.2s ease, transform 0.2s ease;
                    }
                    .hotspot-card.presence-away {
                        opacity: 0;
                        transform: translate(-50%, 10px) scale(0.95);
                    }
                    .hotspot-card.presence-shown {
                        opacity: 1;
                        transform: translate(-50%, 0) scale(1);
                    }
                    .hotspot-title {
                        font-size: 10px;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: #a8a29e;
                        margin: 0 0 0.25rem;
                    }
                    .hotspot-detail {
                        font-size: 0.75rem;
                        line-height: 1.6;
                        color: #292524;
                        margin: 0;
                    }
                    @media (max-width: 768px) {
                        .hotspot-dot { width: 0.75rem; height: 0.75rem; }
                        .hotspot-card { width: 12rem; }
                    }
                "#}
            </style>
            <Nav />
            <Hero />
            <About />
            <Services />
            <Projects />
            <Pillars />
            <Founders />
            <Footer />
        </div>
    }
}
