use gloo_console::log;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::ToastMessage;
use crate::content;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Fired after a (mock) submission; the form gets no acknowledgement back.
    pub on_submitted: Callback<ToastMessage>,
}

#[function_component(Contact)]
pub fn contact(props: &Props) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let organization = use_state(String::new);
    let interest = use_state(|| content::INTEREST_OPTIONS[0].to_string());
    let message = use_state(String::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_organization = {
        let organization = organization.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            organization.set(input.value());
        })
    };
    let on_interest = {
        let interest = interest.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            interest.set(select.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(textarea.value());
        })
    };

    // Mock submission: no transport exists, the success path is synthesized
    // locally and the fields reset.
    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let organization = organization.clone();
        let interest = interest.clone();
        let message = message.clone();
        let on_submitted = props.on_submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log!("contact form submitted (mock), interest:", (*interest).clone());
            on_submitted.emit(ToastMessage {
                title: "Message Sent Successfully!".into(),
                description: "We'll get back to you within 24 hours. Thank you for \
                    your interest in AAItoai!"
                    .into(),
            });
            name.set(String::new());
            email.set(String::new());
            organization.set(String::new());
            interest.set(content::INTEREST_OPTIONS[0].to_string());
            message.set(String::new());
        })
    };

    let contact = &content::CONTACT;

    html! {
        <section id="contact" class="contact">
            <style>
                {r#"
                    .contact {
                        padding: 6rem 1.5rem;
                        background: #fff;
                    }
                    .contact-panel {
                        max-width: 80rem;
                        margin: 0 auto;
                        background: #111827;
                        border-radius: 3rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                    }
                    .contact-info {
                        padding: 4rem;
                        color: #fff;
                    }
                    .contact-heading {
                        font-size: 1.875rem;
                        font-weight: 800;
                        margin: 0 0 1.5rem;
                    }
                    .contact-description {
                        color: #9ca3af;
                        font-size: 1.125rem;
                        line-height: 1.7;
                        margin-bottom: 3rem;
                    }
                    .contact-item {
                        display: flex;
                        align-items: flex-start;
                        margin-bottom: 2rem;
                        transition: transform 0.3s ease;
                    }
                    .contact-item:hover { transform: translateX(10px); }
                    .contact-item-icon {
                        background: #1f2937;
                        color: #ef4444;
                        border-radius: 0.75rem;
                        padding: 0.75rem 1rem;
                        font-weight: 700;
                    }
                    .contact-item-title {
                        font-weight: 700;
                        font-size: 1.125rem;
                        margin: 0;
                    }
                    .contact-item-value {
                        color: #9ca3af;
                        margin: 0.25rem 0 0;
                    }
                    .contact-form {
                        padding: 4rem;
                        background: #fff;
                    }
                    .contact-field { margin-bottom: 1.5rem; }
                    .contact-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .contact-label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 0.5rem;
                    }
                    .contact-input {
                        width: 100%;
                        box-sizing: border-box;
                        border: 1px solid #e5e7eb;
                        background: #f9fafb;
                        border-radius: 0.75rem;
                        padding: 0.75rem 1rem;
                        font-size: 1rem;
                        outline: none;
                        transition: border-color 0.2s ease, box-shadow 0.2s ease;
                    }
                    .contact-input:focus {
                        border-color: #ef4444;
                        box-shadow: 0 0 0 2px #fecaca;
                    }
                    .contact-submit {
                        width: 100%;
                        padding: 1rem 1.5rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: #dc2626;
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 700;
                        cursor: pointer;
                        box-shadow: 0 10px 15px -3px rgba(220, 38, 38, 0.3);
                        transition: background 0.2s ease, transform 0.2s ease;
                    }
                    .contact-submit:hover {
                        background: #b91c1c;
                        transform: scale(1.02);
                    }
                    @media (max-width: 950px) {
                        .contact-panel { grid-template-columns: 1fr; }
                        .contact-info, .contact-form { padding: 2.5rem; }
                        .contact-row { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="contact-panel">
                <div class="contact-info">
                    <h2 class="contact-heading">{ contact.heading }</h2>
                    <p class="contact-description">{ contact.description }</p>
                    <div class="contact-item">
                        <div class="contact-item-icon">{"@"}</div>
                        <div style="margin-left: 1.25rem;">
                            <p class="contact-item-title">{"Email Us"}</p>
                            <p class="contact-item-value">{ contact.email }</p>
                        </div>
                    </div>
                    <div class="contact-item">
                        <div class="contact-item-icon">{"\u{260E}"}</div>
                        <div style="margin-left: 1.25rem;">
                            <p class="contact-item-title">{"Call Us"}</p>
                            <p class="contact-item-value">{ contact.phone }</p>
                        </div>
                    </div>
                    <div class="contact-item">
                        <div class="contact-item-icon">{"\u{2302}"}</div>
                        <div style="margin-left: 1.25rem;">
                            <p class="contact-item-title">{"Visit Us"}</p>
                            <p class="contact-item-value">{ contact.address }</p>
                        </div>
                    </div>
                </div>
                <div class="contact-form">
                    <form onsubmit={on_submit}>
                        <div class="contact-row contact-field">
                            <div>
                                <label class="contact-label">{"Full Name"}</label>
                                <input
                                    type="text"
                                    class="contact-input"
                                    value={(*name).clone()}
                                    oninput={on_name}
                                    required={true}
                                />
                            </div>
                            <div>
                                <label class="contact-label">{"Email Address"}</label>
                                <input
                                    type="email"
                                    class="contact-input"
                                    value={(*email).clone()}
                                    oninput={on_email}
                                    required={true}
                                />
                            </div>
                        </div>
                        <div class="contact-field">
                            <label class="contact-label">{"Organization/School"}</label>
                            <input
                                type="text"
                                class="contact-input"
                                value={(*organization).clone()}
                                oninput={on_organization}
                            />
                        </div>
                        <div class="contact-field">
                            <label class="contact-label">{"I'm interested in:"}</label>
                            <select class="contact-input" onchange={on_interest}>
                                {
                                    content::INTEREST_OPTIONS.iter().map(|option| html! {
                                        <option
                                            value={*option}
                                            selected={*option == *interest}
                                        >
                                            { *option }
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                        </div>
                        <div class="contact-field">
                            <label class="contact-label">{"Message"}</label>
                            <textarea
                                rows="4"
                                class="contact-input"
                                value={(*message).clone()}
                                oninput={on_message}
                                required={true}
                            />
                        </div>
                        <button type="submit" class="contact-submit">
                            {"Send Message"}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
