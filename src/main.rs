use log::{info, Level};
use stylist::css;
use stylist::yew::Global;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod anim {
    pub mod count_up;
    pub mod ease;
    pub mod frame;
    pub mod reveal;
    pub mod scroll;
}
mod hooks {
    pub mod count_up;
    pub mod reveal;
    pub mod scroll_fraction;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod loading;
    pub mod programs;
    pub mod stats;
    pub mod toast;
}
mod pages {
    pub mod home;
}

use components::loading::LoadingScreen;
use hooks::scroll_fraction::use_scroll_fraction;
use pages::home::{scroll_to_section, Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
            <h1 style="font-size: 3rem; margin: 0;">{"404"}</h1>
            <p style="color: #6b7280;">{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
        </div>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let progress = use_scroll_fraction();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_inner = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_inner.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(offset > config::NAV_SCROLLED_AFTER_PX);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_links = content::NAV_ITEMS
        .iter()
        .map(|item| {
            let menu_open = menu_open.clone();
            let section_id = item.section_id;
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                scroll_to_section(section_id);
            });
            html! {
                <a
                    href={format!("#{}", item.section_id)}
                    class="nav-link"
                    {onclick}
                >
                    { item.label }
                </a>
            }
        })
        .collect::<Html>();

    let go_contact = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            scroll_to_section("contact");
        })
    };

    let go_home = Callback::from(move |_: MouseEvent| {
        scroll_to_section("home");
    });

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    // The smoothed scroll fraction drives the progress bar under the navbar.
    let progress_style = format!("transform: scaleX({progress:.4});");

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        background: transparent;
                        padding: 1rem 0;
                        transition: background 0.5s ease, padding 0.5s ease,
                            box-shadow 0.5s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        padding: 0.5rem 0;
                    }
                    .nav-progress {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        height: 2px;
                        background: #dc2626;
                        transform-origin: left;
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 4rem;
                    }
                    .nav-logo {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #111827;
                        letter-spacing: -0.02em;
                        cursor: pointer;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #4b5563;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover { color: #dc2626; }
                    .nav-cta {
                        background: #111827;
                        color: #fff;
                        padding: 0.625rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 600;
                        cursor: pointer;
                        box-shadow: 0 10px 15px -3px rgba(17, 24, 39, 0.2);
                        transition: background 0.3s ease;
                    }
                    .nav-cta:hover { background: #dc2626; }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #4b5563;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            align-items: stretch;
                            gap: 0;
                            background: #fff;
                            border-top: 1px solid #f3f4f6;
                            padding: 0.5rem 1.5rem 1.5rem;
                        }
                        .nav-right.mobile-menu-open { display: flex; }
                        .nav-right .nav-link {
                            padding: 0.75rem;
                            font-size: 1rem;
                        }
                        .nav-right .nav-cta {
                            margin-top: 1rem;
                            border-radius: 0.5rem;
                        }
                    }
                "#}
            </style>
            <div class="nav-progress" style={progress_style}></div>
            <div class="nav-content">
                <span class="nav-logo" onclick={go_home}>{ content::SITE_NAME }</span>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { nav_links }
                    <button class="nav-cta" onclick={go_contact}>{"Get Started"}</button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let is_loading = use_state(|| true);
    let finish_loading = {
        let is_loading = is_loading.clone();
        Callback::from(move |_| is_loading.set(false))
    };

    html! {
        <>
            <Global css={css!(r#"
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI",
                        Roboto, Helvetica, Arial, sans-serif;
                    color: #111827;
                    background: #fff;
                    overflow-x: hidden;
                }
            "#)} />
            {
                if *is_loading {
                    html! { <LoadingScreen on_finished={finish_loading} /> }
                } else {
                    html! {
                        <BrowserRouter>
                            <Nav />
                            <Switch<Route> render={switch} />
                        </BrowserRouter>
                    }
                }
            }
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
