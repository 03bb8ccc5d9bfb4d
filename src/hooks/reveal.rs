//! `use_reveal` — one-shot "has this block ever been on screen" hook.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::anim::reveal::RevealLatch;

/// Reports `true` once `node` has intersected the viewport (inset by
/// `margin` pixels) at least once, and keeps reporting `true` for the rest of
/// the component's life. Blocks already in view latch on mount, before any
/// scroll event fires. Listeners are detached as soon as the latch closes.
#[hook]
pub fn use_reveal(node: NodeRef, margin: f64) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed_state = revealed.clone();
        use_effect_with_deps(
            move |(node, margin, latched)| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| ());
                if !latched {
                    if let Some(window) = web_sys::window() {
                        let latch = Rc::new(RefCell::new(RevealLatch::new(*margin)));
                        let node = node.clone();
                        let check_window = window.clone();
                        let check = Closure::wrap(Box::new(move || {
                            if let Some(element) = node.cast::<web_sys::Element>() {
                                let rect = element.get_bounding_client_rect();
                                let viewport = check_window
                                    .inner_height()
                                    .ok()
                                    .and_then(|h| h.as_f64())
                                    .unwrap_or(0.0);
                                let mut latch = latch.borrow_mut();
                                latch.observe(rect.top(), rect.bottom(), viewport);
                                if latch.revealed() {
                                    revealed_state.set(true);
                                }
                            }
                        }) as Box<dyn FnMut()>);

                        let _ = window.add_event_listener_with_callback(
                            "scroll",
                            check.as_ref().unchecked_ref(),
                        );
                        let _ = window.add_event_listener_with_callback(
                            "resize",
                            check.as_ref().unchecked_ref(),
                        );

                        // Initial check: blocks in view at mount must latch
                        // without waiting for a scroll.
                        let _ = check
                            .as_ref()
                            .unchecked_ref::<web_sys::js_sys::Function>()
                            .call0(&JsValue::NULL);

                        cleanup = Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                check.as_ref().unchecked_ref(),
                            );
                            let _ = window.remove_event_listener_with_callback(
                                "resize",
                                check.as_ref().unchecked_ref(),
                            );
                        });
                    }
                }
                cleanup
            },
            (node, margin, *revealed),
        );
    }

    *revealed
}
