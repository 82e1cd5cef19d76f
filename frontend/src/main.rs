use yew::prelude::*;
use log::info;

mod config;
mod content;
mod presence;
mod scroll;
mod seo;
mod view_state;

mod components {
    pub mod hotspot;
    pub mod nav;
    pub mod reveal;
    pub mod social_icons;
    pub mod text;
}
mod sections {
    pub mod about;
    pub mod footer;
    pub mod founders;
    pub mod hero;
    pub mod pillars;
    pub mod projects;
    pub mod services;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    seo::apply_to_document();
    yew::Renderer::<App>::new().render();
}
