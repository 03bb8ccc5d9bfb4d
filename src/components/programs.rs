use yew::prelude::*;

use crate::config;
use crate::content;
use crate::hooks::reveal::use_reveal;

#[function_component(Programs)]
pub fn programs() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), config::REVEAL_MARGIN_PX);

    html! {
        <section
            id="programs"
            ref={section_ref}
            class={classes!("programs", revealed.then_some("revealed"))}
        >
            <style>
                {r#"
                    .programs {
                        padding: 6rem 1.5rem;
                        background: #f9fafb;
                    }
                    .programs-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .programs .fade-up {
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.7s ease, transform 0.7s ease;
                    }
                    .programs.revealed .fade-up {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .programs-header {
                        text-align: center;
                        margin-bottom: 5rem;
                    }
                    .programs-kicker {
                        color: #dc2626;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        font-size: 0.875rem;
                    }
                    .programs-title {
                        font-size: clamp(2.25rem, 4vw, 3rem);
                        font-weight: 800;
                        color: #111827;
                        margin: 0.5rem 0 1rem;
                    }
                    .programs-subtitle {
                        font-size: 1.25rem;
                        color: #6b7280;
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .programs-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .program-card {
                        background: #fff;
                        border-radius: 2rem;
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        transition: transform 0.5s ease, box-shadow 0.5s ease,
                            opacity 0.7s ease;
                    }
                    .program-card:hover {
                        transform: translateY(-15px);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.15);
                    }
                    .program-title {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #111827;
                        margin: 0 0 1rem;
                    }
                    .program-description {
                        color: #4b5563;
                        line-height: 1.7;
                        flex-grow: 1;
                        margin: 0 0 2rem;
                    }
                    .program-feature {
                        display: flex;
                        align-items: center;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                        background: rgba(255, 255, 255, 0.6);
                        border: 1px solid #f3f4f6;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .program-feature::before {
                        content: '';
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #111827;
                        margin-right: 0.75rem;
                    }
                    .program-button {
                        width: 100%;
                        margin-top: 1rem;
                        padding: 1rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: #f9fafb;
                        color: #111827;
                        font-weight: 700;
                        cursor: pointer;
                        transition: background 0.3s ease, color 0.3s ease;
                    }
                    .program-button:hover {
                        background: #111827;
                        color: #fff;
                    }
                    @media (max-width: 950px) {
                        .programs-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="programs-inner">
                <div class="programs-header fade-up">
                    <span class="programs-kicker">{"Curriculum"}</span>
                    <h2 class="programs-title">{"Our Programs"}</h2>
                    <p class="programs-subtitle">
                        {"Comprehensive AI education designed specifically for rural \
                          and underserved communities."}
                    </p>
                </div>
                <div class="programs-grid">
                    {
                        content::PROGRAMS.iter().enumerate().map(|(i, program)| {
                            let delay = format!("transition-delay: {:.2}s;", 0.15 * i as f64);
                            html! {
                                <div class="program-card fade-up" style={delay}>
                                    <h3 class="program-title">{ program.title }</h3>
                                    <p class="program-description">{ program.description }</p>
                                    <div>
                                        {
                                            program.features.iter().map(|feature| html! {
                                                <div class="program-feature">{ *feature }</div>
                                            }).collect::<Html>()
                                        }
                                    </div>
                                    <button class="program-button">{"View Details"}</button>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
