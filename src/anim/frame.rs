//! Per-frame callback scheduling.
//!
//! `Scheduler` abstracts one-shot frame requests so the animation driver can
//! be exercised in tests without a browser; `RafScheduler` is the
//! `requestAnimationFrame` backend used by the hooks. `Ticker` re-requests a
//! frame after each callback until the callback returns [`Tick::Stop`] or the
//! owner cancels it, and cancels any pending request on drop so an unmounted
//! component never receives another frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// One-shot frame source. `schedule` runs the callback on the next frame with
/// a `DOMHighResTimeStamp`-style millisecond timestamp and returns an id
/// usable with `cancel`.
pub trait Scheduler {
    fn schedule(&self, callback: Box<dyn FnOnce(f64)>) -> i32;
    fn cancel(&self, id: i32);
}

/// Whether a `Ticker` callback wants another frame.
pub enum Tick {
    Continue,
    Stop,
}

/// Browser frame source backed by `requestAnimationFrame`.
pub struct RafScheduler;

impl Scheduler for RafScheduler {
    fn schedule(&self, callback: Box<dyn FnOnce(f64)>) -> i32 {
        let closure = Closure::once_into_js(move |timestamp_ms: f64| callback(timestamp_ms));
        web_sys::window()
            .and_then(|w| {
                w.request_animation_frame(closure.unchecked_ref::<web_sys::js_sys::Function>())
                    .ok()
            })
            .unwrap_or(0)
    }

    fn cancel(&self, id: i32) {
        if let Some(w) = web_sys::window() {
            let _ = w.cancel_animation_frame(id);
        }
    }
}

/// Self-rescheduling per-frame loop.
pub struct Ticker {
    inner: Rc<TickerInner>,
}

struct TickerInner {
    scheduler: Rc<dyn Scheduler>,
    running: Cell<bool>,
    frame_id: Cell<i32>,
    callback: RefCell<Box<dyn FnMut(f64) -> Tick>>,
}

impl Ticker {
    /// Starts the loop; the first frame is requested immediately.
    pub fn start(
        scheduler: Rc<dyn Scheduler>,
        callback: impl FnMut(f64) -> Tick + 'static,
    ) -> Self {
        let inner = Rc::new(TickerInner {
            scheduler,
            running: Cell::new(true),
            frame_id: Cell::new(0),
            callback: RefCell::new(Box::new(callback)),
        });
        TickerInner::pump(&inner);
        Self { inner }
    }

    /// Cancels the pending frame request. Idempotent; frames already delivered
    /// by the scheduler after this point are ignored.
    pub fn stop(&self) {
        if self.inner.running.replace(false) {
            self.inner.scheduler.cancel(self.inner.frame_id.get());
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

impl TickerInner {
    fn pump(inner: &Rc<Self>) {
        let next = Rc::clone(inner);
        let id = inner.scheduler.schedule(Box::new(move |timestamp_ms| {
            if !next.running.get() {
                return;
            }
            match (next.callback.borrow_mut())(timestamp_ms) {
                Tick::Continue => Self::pump(&next),
                Tick::Stop => next.running.set(false),
            }
        }));
        inner.frame_id.set(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-driven frame source: frames fire only when the test pumps them.
    struct ManualScheduler {
        pending: RefCell<Vec<(i32, Box<dyn FnOnce(f64)>)>>,
        next_id: Cell<i32>,
        scheduled: Cell<u32>,
    }

    impl ManualScheduler {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                pending: RefCell::new(Vec::new()),
                next_id: Cell::new(1),
                scheduled: Cell::new(0),
            })
        }

        /// Fires every currently pending frame and returns how many callbacks
        /// ran. Requests made by those callbacks land in the next frame.
        fn run_frame(&self, timestamp_ms: f64) -> usize {
            let batch: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            let fired = batch.len();
            for (_, callback) in batch {
                callback(timestamp_ms);
            }
            fired
        }

        fn scheduled_count(&self) -> u32 {
            self.scheduled.get()
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, callback: Box<dyn FnOnce(f64)>) -> i32 {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.scheduled.set(self.scheduled.get() + 1);
            self.pending.borrow_mut().push((id, callback));
            id
        }

        fn cancel(&self, id: i32) {
            self.pending.borrow_mut().retain(|(pending_id, _)| *pending_id != id);
        }
    }

    #[test]
    fn ticks_until_the_callback_stops() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let ticks_inner = Rc::clone(&ticks);
        let _ticker = Ticker::start(scheduler.clone(), move |_| {
            ticks_inner.set(ticks_inner.get() + 1);
            if ticks_inner.get() == 3 {
                Tick::Stop
            } else {
                Tick::Continue
            }
        });

        for frame in 0..5 {
            scheduler.run_frame(f64::from(frame) * 16.0);
        }
        assert_eq!(ticks.get(), 3);
        // Nothing left queued after Stop.
        assert_eq!(scheduler.run_frame(100.0), 0);
    }

    #[test]
    fn stop_cancels_the_pending_frame() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let ticks_inner = Rc::clone(&ticks);
        let ticker = Ticker::start(scheduler.clone(), move |_| {
            ticks_inner.set(ticks_inner.get() + 1);
            Tick::Continue
        });

        scheduler.run_frame(16.0);
        scheduler.run_frame(32.0);
        assert_eq!(ticks.get(), 2);

        ticker.stop();
        let scheduled_before = scheduler.scheduled_count();
        assert_eq!(scheduler.run_frame(48.0), 0);
        assert_eq!(ticks.get(), 2);
        assert_eq!(scheduler.scheduled_count(), scheduled_before);
    }

    #[test]
    fn dropping_the_ticker_cancels_the_pending_frame() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let ticks_inner = Rc::clone(&ticks);
        let ticker = Ticker::start(scheduler.clone(), move |_| {
            ticks_inner.set(ticks_inner.get() + 1);
            Tick::Continue
        });

        scheduler.run_frame(16.0);
        drop(ticker);
        assert_eq!(scheduler.run_frame(32.0), 0);
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let scheduler = ManualScheduler::new();
        let ticker = Ticker::start(scheduler.clone(), |_| Tick::Continue);
        ticker.stop();
        ticker.stop();
        assert_eq!(scheduler.run_frame(16.0), 0);
    }

    #[test]
    fn frames_delivered_after_stop_are_ignored() {
        // A scheduler that cannot un-queue (worst case): the ticker must still
        // swallow the late delivery.
        struct NoCancel(RefCell<Vec<Box<dyn FnOnce(f64)>>>);
        impl Scheduler for NoCancel {
            fn schedule(&self, callback: Box<dyn FnOnce(f64)>) -> i32 {
                self.0.borrow_mut().push(callback);
                0
            }
            fn cancel(&self, _id: i32) {}
        }

        let scheduler = Rc::new(NoCancel(RefCell::new(Vec::new())));
        let ticks = Rc::new(Cell::new(0));
        let ticks_inner = Rc::clone(&ticks);
        let ticker = Ticker::start(scheduler.clone(), move |_| {
            ticks_inner.set(ticks_inner.get() + 1);
            Tick::Continue
        });

        ticker.stop();
        let late: Vec<_> = scheduler.0.borrow_mut().drain(..).collect();
        for callback in late {
            callback(16.0);
        }
        assert_eq!(ticks.get(), 0);
    }
}
