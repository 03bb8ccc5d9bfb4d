use yew::prelude::*;

use crate::config;
use crate::content;
use crate::hooks::count_up::use_count_up;
use crate::hooks::reveal::use_reveal;

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    value: i64,
    suffix: &'static str,
    label: &'static str,
    armed: bool,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let current = use_count_up(0, props.value, props.armed);

    html! {
        <div class="stat">
            <div class="stat-value">
                <span>{ current }</span>
                <span class="stat-suffix">{ props.suffix }</span>
            </div>
            <div class="stat-label">{ props.label }</div>
            <div class="stat-underline"></div>
        </div>
    }
}

/// Dark stats band. One reveal trigger on the section arms all four counters,
/// so they start together the first time the band scrolls into view.
#[function_component(Stats)]
pub fn stats() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal(section_ref.clone(), config::REVEAL_MARGIN_PX);

    html! {
        <section ref={section_ref} class="stats">
            <style>
                {r#"
                    .stats {
                        background: #111827;
                        padding: 5rem 1.5rem;
                    }
                    .stats-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        text-align: center;
                    }
                    .stat-value {
                        display: flex;
                        justify-content: center;
                        align-items: baseline;
                        font-size: 3.5rem;
                        font-weight: 900;
                        color: #fff;
                        margin-bottom: 0.5rem;
                    }
                    .stat:hover .stat-value { color: #ef4444; }
                    .stat-suffix {
                        font-size: 2rem;
                        margin-left: 0.25rem;
                        color: #dc2626;
                    }
                    .stat-label {
                        font-size: 0.95rem;
                        font-weight: 500;
                        color: #9ca3af;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .stat-underline {
                        width: 3rem;
                        height: 0.25rem;
                        background: #1f2937;
                        margin: 1rem auto 0;
                        border-radius: 9999px;
                        transition: width 0.5s ease, background 0.5s ease;
                    }
                    .stat:hover .stat-underline {
                        width: 6rem;
                        background: #dc2626;
                    }
                    @media (max-width: 768px) {
                        .stats-grid { grid-template-columns: repeat(2, 1fr); }
                        .stat-value { font-size: 2.5rem; }
                    }
                "#}
            </style>
            <div class="stats-grid">
                {
                    content::STATS.iter().map(|stat| html! {
                        <StatCounter
                            value={stat.value}
                            suffix={stat.suffix}
                            label={stat.label}
                            armed={revealed}
                        />
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
