use yew::prelude::*;

use crate::config;
use crate::content;
use crate::hooks::reveal::use_reveal;

#[function_component(About)]
pub fn about() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), config::REVEAL_MARGIN_PX);
    let about = &content::ABOUT;

    html! {
        <section id="about" ref={section_ref} class={classes!("about", revealed.then_some("revealed"))}>
            <style>
                {r#"
                    .about {
                        padding: 6rem 1.5rem;
                        background: #fff;
                    }
                    .about-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 5rem;
                        align-items: center;
                    }
                    .about .fade-up {
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.7s ease, transform 0.7s ease;
                    }
                    .about.revealed .fade-up {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .about-heading {
                        font-size: clamp(2.25rem, 4vw, 3rem);
                        font-weight: 800;
                        color: #111827;
                        line-height: 1.2;
                        margin: 0 0 1.5rem;
                    }
                    .about-accent {
                        background: linear-gradient(90deg, #dc2626, #f87171);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .about-mission {
                        font-size: 1.125rem;
                        color: #6b7280;
                        line-height: 1.7;
                        margin-bottom: 2rem;
                    }
                    .about-quote-card {
                        background: #f9fafb;
                        border: 1px solid #f3f4f6;
                        border-radius: 1.5rem;
                        padding: 2rem;
                        transition-delay: 0.15s;
                    }
                    .about-quote {
                        font-style: italic;
                        font-size: 1.25rem;
                        font-weight: 500;
                        color: #374151;
                        line-height: 1.7;
                        margin: 0;
                    }
                    .about-quote-author {
                        display: flex;
                        align-items: center;
                        margin-top: 2rem;
                    }
                    .about-avatar {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 50%;
                        background: #e5e7eb;
                        border: 4px solid #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        color: #4b5563;
                    }
                    .about-author-name {
                        font-weight: 700;
                        color: #111827;
                    }
                    .about-author-role {
                        color: #dc2626;
                        font-weight: 500;
                    }
                    .about-values {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .value-card {
                        background: #fff;
                        border: 1px solid #f3f4f6;
                        border-radius: 1.5rem;
                        padding: 2rem;
                        box-shadow: 0 10px 15px -3px rgba(229, 231, 235, 0.5);
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }
                    .value-card:hover {
                        transform: translateY(-10px);
                        border-color: #fecaca;
                    }
                    .value-icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 1rem;
                        background: #dc2626;
                        box-shadow: 0 10px 15px -3px rgba(220, 38, 38, 0.3);
                        margin-bottom: 1.5rem;
                    }
                    .value-title {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #111827;
                        margin: 0 0 0.75rem;
                    }
                    .value-description {
                        color: #6b7280;
                        line-height: 1.6;
                        margin: 0;
                    }
                    @media (max-width: 950px) {
                        .about-inner { grid-template-columns: 1fr; gap: 3rem; }
                    }
                    @media (max-width: 600px) {
                        .about-values { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="about-inner">
                <div class="fade-up">
                    <h2 class="about-heading">
                        { about.heading }{" "}
                        <span class="about-accent">{ about.accent }</span>
                    </h2>
                    <p class="about-mission">{ about.mission }</p>
                    <div class="about-quote-card fade-up">
                        <blockquote class="about-quote">{ about.quote }</blockquote>
                        <div class="about-quote-author">
                            <div class="about-avatar">{ about.quote_initials }</div>
                            <div style="margin-left: 1rem;">
                                <div class="about-author-name">{ about.quote_author }</div>
                                <div class="about-author-role">{ about.quote_role }</div>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="about-values">
                    {
                        content::VALUES.iter().enumerate().map(|(i, value)| {
                            let delay = format!("transition-delay: {:.2}s;", 0.15 * i as f64);
                            html! {
                                <div class="value-card fade-up" style={delay}>
                                    <div class="value-icon"></div>
                                    <h3 class="value-title">{ value.title }</h3>
                                    <p class="value-description">{ value.description }</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
