use log::{debug, warn};
use yew::prelude::*;

use crate::config::MENU_EXIT_MS;
use crate::content::NAV_LINKS;
use crate::presence::use_presence;
use crate::scroll::ScrollListener;
use crate::view_state::{past_scroll_threshold, NavState, NavTheme};

fn current_scroll_offset() -> Option<f64> {
    web_sys::window().and_then(|window| window.scroll_y().ok())
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let state = NavState { scrolled: *is_scrolled, menu_open: *menu_open };

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            if let Some(offset) = current_scroll_offset() {
                is_scrolled.set(past_scroll_threshold(offset));
            }

            let listener = ScrollListener::new(move || {
                if let Some(offset) = current_scroll_offset() {
                    is_scrolled.set(past_scroll_threshold(offset));
                }
            })
            .map_err(|e| warn!("Failed to register scroll listener: {:?}", e))
            .ok();

            move || drop(listener)
        }, ());
    }

    use_effect_with_deps(|scrolled: &bool| {
        debug!("Navbar theme: {:?}", NavTheme::from_scrolled(*scrolled));
        || ()
    }, *is_scrolled);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = state.toggle_menu();
            debug!("Mobile menu open: {}", next.menu_open);
            menu_open.set(next.menu_open);
        })
    };

    // No prevent_default: the anchor still navigates.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(state.close_menu().menu_open);
        })
    };

    let theme = state.theme();
    let overlay_ref = use_node_ref();
    let overlay = use_presence(state.menu_open, MENU_EXIT_MS, overlay_ref.clone());

    html! {
        <>
            <nav class={theme.nav_class()}>
                <div class="nav-content">
                    <div class="nav-left">
                        <a href="#home" class="nav-logo">
                            <img src={theme.logo_src()} alt="Viyaa" />
                        </a>
                    </div>

                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.label} href={link.href} class={classes!("nav-link", theme.text_class())}>
                                { link.label }
                            </a>
                        }) }
                    </div>

                    <div class="nav-right">
                        <a href="#contact" class={theme.talk_button_class()}>{"LET'S TALK"}</a>
                    </div>

                    <button
                        class={classes!("burger-menu", theme.text_class(), state.menu_open.then(|| "open"))}
                        aria-label="Toggle menu"
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>

            {
                if overlay.is_mounted() {
                    html! {
                        <div ref={overlay_ref} class={classes!("mobile-menu-overlay", overlay.class())}>
                            { for NAV_LINKS.iter().map(|link| html! {
                                <a key={link.label} href={link.href} class="mobile-menu-link" onclick={close_menu.clone()}>
                                    { link.label }
                                </a>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Window};

    use super::*;

    fn scroll_window_to(window: &Window, offset: f64) {
        window.scroll_to_with_x_and_y(0.0, offset);
        let event = web_sys::Event::new("scroll").unwrap();
        window.dispatch_event(&event).unwrap();
    }

    fn nav_class(root: &Element) -> Option<String> {
        root.query_selector("nav").unwrap().map(|nav| nav.class_name())
    }

    #[wasm_bindgen_test]
    async fn scroll_updates_theme_until_unmounted() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let body = document.body().unwrap();

        let spacer = document.create_element("div").unwrap();
        spacer.set_attribute("style", "height: 5000px;").unwrap();
        body.append_child(&spacer).unwrap();
        scroll_window_to(&window, 0.0);

        let root = document.create_element("div").unwrap();
        let app = yew::Renderer::<Nav>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;
        assert_eq!(nav_class(&root).as_deref(), Some("top-nav"));

        scroll_window_to(&window, 200.0);
        TimeoutFuture::new(50).await;
        assert_eq!(nav_class(&root).as_deref(), Some("top-nav scrolled"));

        app.destroy();
        TimeoutFuture::new(50).await;
        assert_eq!(nav_class(&root), None);

        scroll_window_to(&window, 0.0);
        scroll_window_to(&window, 300.0);
        TimeoutFuture::new(50).await;
        assert_eq!(nav_class(&root), None);
        assert_eq!(root.child_element_count(), 0);

        body.remove_child(&spacer).unwrap();
    }
}
