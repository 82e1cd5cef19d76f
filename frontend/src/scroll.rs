//! Window scroll listener that unregisters itself when dropped.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn new<F>(on_scroll: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;

    use super::*;

    fn dispatch_scroll() {
        let window = web_sys::window().unwrap();
        let event = web_sys::Event::new("scroll").unwrap();
        window.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn dropped_listener_stops_receiving_scrolls() {
        let hits = Rc::new(Cell::new(0));
        let listener = {
            let hits = hits.clone();
            ScrollListener::new(move || hits.set(hits.get() + 1)).unwrap()
        };

        dispatch_scroll();
        assert_eq!(hits.get(), 1);

        drop(listener);
        dispatch_scroll();
        dispatch_scroll();
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn listeners_are_removed_independently() {
        let first_hits = Rc::new(Cell::new(0));
        let second_hits = Rc::new(Cell::new(0));
        let first = {
            let hits = first_hits.clone();
            ScrollListener::new(move || hits.set(hits.get() + 1)).unwrap()
        };
        let second = {
            let hits = second_hits.clone();
            ScrollListener::new(move || hits.set(hits.get() + 1)).unwrap()
        };

        drop(first);
        dispatch_scroll();
        assert_eq!(first_hits.get(), 0);
        assert_eq!(second_hits.get(), 1);
        drop(second);
    }
}
