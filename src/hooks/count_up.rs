//! `use_count_up` — eased integer counter armed by a reveal trigger.

use std::rc::Rc;

use yew::prelude::*;

use crate::anim::count_up::CountUp;
use crate::anim::frame::{RafScheduler, Tick, Ticker};
use crate::config;

/// Displays `start` until `armed` first becomes true, then counts to `end`
/// over [`config::COUNT_UP_DURATION_MS`] with an ease-out curve, one frame at
/// a time. The counter runs once: later `armed` flips are ignored, and
/// unmounting cancels the pending frame subscription.
#[hook]
pub fn use_count_up(start: i64, end: i64, armed: bool) -> i64 {
    let value = use_state_eq(|| start);
    let counter = use_mut_ref(|| CountUp::new(start, end, config::COUNT_UP_DURATION_MS));

    {
        let value = value.clone();
        use_effect_with_deps(
            move |&armed| {
                let mut ticker = None;
                if armed {
                    let now = web_sys::window()
                        .and_then(|w| w.performance())
                        .map(|p| p.now())
                        .unwrap_or(0.0);
                    counter.borrow_mut().arm(now);
                    if counter.borrow().is_running() {
                        let counter = counter.clone();
                        let value = value.clone();
                        ticker = Some(Ticker::start(Rc::new(RafScheduler), move |timestamp_ms| {
                            let mut counter = counter.borrow_mut();
                            value.set(counter.sample(timestamp_ms));
                            if counter.is_done() {
                                Tick::Stop
                            } else {
                                Tick::Continue
                            }
                        }));
                    } else {
                        // Already finished: hold the pinned end value.
                        value.set(counter.borrow_mut().sample(now));
                    }
                }
                move || drop(ticker)
            },
            armed,
        );
    }

    *value
}
