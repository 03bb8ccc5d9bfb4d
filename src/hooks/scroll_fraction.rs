//! `use_scroll_fraction` — smoothed page scroll progress in `[0, 1]`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::anim::frame::{RafScheduler, Tick, Ticker};
use crate::anim::scroll::{scroll_fraction, Spring};
use crate::config;

fn read_raw_fraction(window: &web_sys::Window) -> f64 {
    let offset = window.scroll_y().unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    scroll_fraction(offset, scroll_height - viewport)
}

/// Tracks how far down the page the viewport is, eased through a critically
/// damped spring so the value glides instead of stepping with each scroll
/// event. Starts from the environment's current position on mount. Frames are
/// only scheduled while the spring is still moving; the next scroll event
/// wakes it again.
#[hook]
pub fn use_scroll_fraction() -> f64 {
    let fraction = use_state_eq(|| 0.0);

    {
        let fraction = fraction.clone();
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
                if let Some(window) = web_sys::window() {
                    let initial = read_raw_fraction(&window);
                    fraction.set(initial);

                    let spring = Rc::new(RefCell::new(Spring::critically_damped(
                        initial,
                        config::SCROLL_SPRING_STIFFNESS,
                    )));
                    let ticker: Rc<RefCell<Option<Ticker>>> = Rc::new(RefCell::new(None));
                    let last_timestamp = Rc::new(Cell::new(None::<f64>));

                    let scroll_window = window.clone();
                    let scroll_spring = spring.clone();
                    let scroll_ticker = ticker.clone();
                    let on_scroll = Closure::wrap(Box::new(move || {
                        scroll_spring
                            .borrow_mut()
                            .set_target(read_raw_fraction(&scroll_window));
                        if scroll_ticker.borrow().is_some() {
                            return;
                        }
                        last_timestamp.set(None);
                        let spring = scroll_spring.clone();
                        let slot = scroll_ticker.clone();
                        let last_timestamp = last_timestamp.clone();
                        let fraction = fraction.clone();
                        let started = Ticker::start(Rc::new(RafScheduler), move |timestamp_ms| {
                            let dt = match last_timestamp.replace(Some(timestamp_ms)) {
                                Some(prev) => ((timestamp_ms - prev) / 1000.0).max(0.0),
                                None => 1.0 / 60.0,
                            };
                            let mut spring = spring.borrow_mut();
                            spring.step(dt);
                            fraction.set(spring.position());
                            if spring.is_settled() {
                                slot.borrow_mut().take();
                                Tick::Stop
                            } else {
                                Tick::Continue
                            }
                        });
                        *scroll_ticker.borrow_mut() = Some(started);
                    }) as Box<dyn FnMut()>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        on_scroll.as_ref().unchecked_ref(),
                    );

                    cleanup = Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                        ticker.borrow_mut().take();
                    });
                }
                cleanup
            },
            (),
        );
    }

    *fraction
}
