use yew::prelude::*;

use crate::content;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Hero)]
pub fn hero(props: &Props) -> Html {
    let hero = &content::HERO;

    let words = hero
        .headline
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let delay = format!("animation-delay: {:.1}s;", 0.1 * i as f64);
            let class = if word == hero.accent_word {
                "hero-word hero-word-accent"
            } else {
                "hero-word"
            };
            html! {
                <span class={class} style={delay}>{ word }</span>
            }
        })
        .collect::<Html>();

    let go_programs = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("programs"))
    };
    let go_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("contact"))
    };

    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                    @keyframes hero-word-in {
                        from { opacity: 0; transform: translateY(50px); filter: blur(10px); }
                        to { opacity: 1; transform: translateY(0); filter: blur(0); }
                    }
                    @keyframes hero-fade-up {
                        from { opacity: 0; transform: translateY(40px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding: 6rem 1.5rem 4rem;
                        background: #f9fafb;
                        overflow: hidden;
                    }
                    .hero-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        width: 100%;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        padding: 0.375rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 500;
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        color: #4b5563;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        margin-bottom: 1.5rem;
                        animation: hero-fade-up 0.7s ease-out both;
                    }
                    .hero-heart {
                        color: #ef4444;
                        margin-right: 0.5rem;
                    }
                    .hero-title {
                        font-size: clamp(3rem, 6vw, 4.5rem);
                        font-weight: 800;
                        letter-spacing: -0.02em;
                        line-height: 1.1;
                        color: #111827;
                        margin: 0 0 1.5rem;
                    }
                    .hero-word {
                        display: inline-block;
                        margin-right: 0.75rem;
                        animation: hero-word-in 0.8s ease-out both;
                    }
                    .hero-word-accent {
                        color: #dc2626;
                    }
                    .hero-description {
                        font-size: 1.25rem;
                        color: #6b7280;
                        line-height: 1.7;
                        max-width: 36rem;
                        margin-bottom: 2.5rem;
                        animation: hero-fade-up 0.7s ease-out 0.5s both;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                        animation: hero-fade-up 0.7s ease-out 0.7s both;
                    }
                    .hero-cta {
                        padding: 1rem 2rem;
                        font-size: 1.125rem;
                        font-weight: 700;
                        border-radius: 1rem;
                        border: none;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .hero-cta-primary {
                        color: #fff;
                        background: #dc2626;
                        box-shadow: 0 20px 25px -5px rgba(220, 38, 38, 0.2);
                    }
                    .hero-cta-secondary {
                        color: #374151;
                        background: rgba(255, 255, 255, 0.5);
                        border: 2px solid #e5e7eb;
                    }
                    .hero-cta-secondary:hover {
                        border-color: #fecaca;
                        color: #dc2626;
                    }
                    .hero-visual {
                        position: relative;
                        min-height: 24rem;
                    }
                    .hero-orbit {
                        position: absolute;
                        inset: 0;
                        margin: auto;
                        border: 1px solid rgba(229, 231, 235, 0.8);
                        border-radius: 50%;
                    }
                    .hero-card {
                        position: absolute;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        background: rgba(255, 255, 255, 0.85);
                        backdrop-filter: blur(8px);
                        border: 1px solid rgba(255, 255, 255, 0.5);
                        border-radius: 1rem;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.1);
                        padding: 1rem;
                        z-index: 2;
                        animation: hero-fade-up 0.8s ease-out 1.5s both;
                    }
                    .hero-card-bottom { bottom: 2.5rem; left: 0; }
                    .hero-card-top { top: 2.5rem; right: 0; animation-delay: 1.8s; }
                    .hero-card-label {
                        font-size: 0.7rem;
                        color: #6b7280;
                        font-weight: 600;
                        text-transform: uppercase;
                        margin: 0;
                    }
                    .hero-card-value {
                        font-size: 0.875rem;
                        font-weight: 700;
                        color: #111827;
                        margin: 0;
                    }
                    @media (max-width: 950px) {
                        .hero-inner { grid-template-columns: 1fr; text-align: center; }
                        .hero-actions { justify-content: center; }
                        .hero-description { margin-left: auto; margin-right: auto; }
                        .hero-visual { display: none; }
                    }
                "#}
            </style>
            <div class="hero-inner">
                <div>
                    <span class="hero-badge">
                        <span class="hero-heart">{"\u{2764}"}</span>
                        { hero.badge }
                    </span>
                    <h1 class="hero-title">{ words }</h1>
                    <p class="hero-description">{ hero.description }</p>
                    <div class="hero-actions">
                        <button class="hero-cta hero-cta-primary" onclick={go_programs}>
                            { hero.primary_cta }{" \u{2192}"}
                        </button>
                        <button class="hero-cta hero-cta-secondary" onclick={go_contact}>
                            { hero.secondary_cta }
                        </button>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="hero-orbit" style="width: 16rem; height: 16rem;"></div>
                    <div class="hero-orbit" style="width: 22rem; height: 22rem;"></div>
                    <div class="hero-orbit" style="width: 28rem; height: 28rem;"></div>
                    <div class="hero-card hero-card-bottom">
                        <div>
                            <p class="hero-card-label">{"Helped So Far"}</p>
                            <p class="hero-card-value">{"60+ Students"}</p>
                        </div>
                    </div>
                    <div class="hero-card hero-card-top">
                        <div>
                            <p class="hero-card-label">{"Advisers"}</p>
                            <p class="hero-card-value">{"10+ Helping"}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
