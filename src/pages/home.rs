use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::programs::Programs;
use crate::components::stats::Stats;
use crate::components::toast::{Toast, ToastMessage};
use crate::config;

/// Smooth-scrolls the page to the section with the given element id.
pub fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let toast = use_state(|| None::<ToastMessage>);
    // Replacing the handle drops (and thereby cancels) the previous timer, so
    // a new toast always gets the full display window.
    let dismiss_timer = use_mut_ref(|| None::<Timeout>);

    let on_submitted = {
        let toast = toast.clone();
        Callback::from(move |message: ToastMessage| {
            toast.set(Some(message));
            let toast = toast.clone();
            *dismiss_timer.borrow_mut() = Some(Timeout::new(config::TOAST_DISMISS_MS, move || {
                toast.set(None);
            }));
        })
    };

    let on_navigate = Callback::from(|id: &'static str| scroll_to_section(id));

    html! {
        <>
            <main>
                <Hero on_navigate={on_navigate} />
                <Stats />
                <About />
                <Programs />
                <Contact on_submitted={on_submitted} />
            </main>
            <Footer />
            {
                if let Some(message) = (*toast).clone() {
                    html! { <Toast message={message} /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
