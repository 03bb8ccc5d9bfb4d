use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::content;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_finished: Callback<()>,
}

/// Full-screen splash shown on first load, dismissed by a fixed timer. The
/// timer handle is dropped on teardown so an early unmount cancels it.
#[function_component(LoadingScreen)]
pub fn loading_screen(props: &Props) -> Html {
    {
        let on_finished = props.on_finished.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::LOADING_SPLASH_MS, move || {
                    on_finished.emit(());
                });
                move || drop(timeout)
            },
            (),
        );
    }

    let bar_style = format!(
        "animation: splash-fill {}ms ease-in-out forwards;",
        config::LOADING_SPLASH_MS
    );

    html! {
        <div class="loading-screen">
            <style>
                {r#"
                    @keyframes splash-fill {
                        from { width: 0%; }
                        to { width: 100%; }
                    }
                    @keyframes splash-pop {
                        from { transform: scale(0.8); opacity: 0; }
                        to { transform: scale(1); opacity: 1; }
                    }
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: #f9fafb;
                    }
                    .loading-brand {
                        font-size: 2.5rem;
                        font-weight: 800;
                        letter-spacing: -0.02em;
                        color: #1f2937;
                        margin-bottom: 2rem;
                        animation: splash-pop 1s ease-out;
                    }
                    .loading-track {
                        width: 16rem;
                        height: 0.5rem;
                        background: #e5e7eb;
                        border-radius: 9999px;
                        overflow: hidden;
                    }
                    .loading-bar {
                        height: 100%;
                        background: #dc2626;
                    }
                    .loading-tagline {
                        margin-top: 1rem;
                        color: #6b7280;
                        font-weight: 500;
                    }
                "#}
            </style>
            <div class="loading-brand">{ content::SITE_NAME }</div>
            <div class="loading-track">
                <div class="loading-bar" style={bar_style}></div>
            </div>
            <p class="loading-tagline">{ content::SITE_TAGLINE }</p>
        </div>
    }
}
