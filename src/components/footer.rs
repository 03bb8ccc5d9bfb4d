use yew::prelude::*;

use crate::content;

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer = &content::FOOTER;

    html! {
        <footer class="footer">
            <style>
                {r#"
                    .footer {
                        background: #111827;
                        color: #d1d5db;
                        border-top: 1px solid #1f2937;
                        padding: 5rem 1.5rem 2.5rem;
                    }
                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 5fr 2fr 2fr 3fr;
                        gap: 3rem;
                        margin-bottom: 4rem;
                    }
                    .footer-brand {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                        letter-spacing: -0.02em;
                        margin-bottom: 1.5rem;
                    }
                    .footer-blurb {
                        color: #9ca3af;
                        line-height: 1.7;
                        max-width: 24rem;
                    }
                    .footer-column-title {
                        color: #fff;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .footer-link {
                        display: block;
                        color: #d1d5db;
                        font-size: 0.875rem;
                        text-decoration: none;
                        margin-bottom: 1rem;
                        transition: color 0.2s ease;
                    }
                    .footer-link:hover { color: #ef4444; }
                    .footer-subscribe-hint {
                        font-size: 0.75rem;
                        color: #6b7280;
                        margin-bottom: 1rem;
                    }
                    .footer-subscribe {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .footer-subscribe input {
                        flex: 1;
                        background: #1f2937;
                        border: none;
                        border-radius: 0.5rem;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        color: #fff;
                        outline: none;
                    }
                    .footer-subscribe button {
                        background: #dc2626;
                        color: #fff;
                        border: none;
                        border-radius: 0.5rem;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .footer-subscribe button:hover { background: #b91c1c; }
                    .footer-bottom {
                        border-top: 1px solid #1f2937;
                        padding-top: 2rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .footer-copyright {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .footer-social {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .footer-social a {
                        color: #6b7280;
                        font-size: 0.875rem;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .footer-social a:hover { color: #fff; }
                    @media (max-width: 950px) {
                        .footer-grid { grid-template-columns: 1fr 1fr; }
                    }
                    @media (max-width: 600px) {
                        .footer-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">{ content::SITE_NAME }</div>
                        <p class="footer-blurb">{ footer.blurb }</p>
                    </div>
                    <div>
                        <h3 class="footer-column-title">{"Programs"}</h3>
                        {
                            footer.program_links.iter().map(|label| html! {
                                <a class="footer-link" href="#programs">{ *label }</a>
                            }).collect::<Html>()
                        }
                    </div>
                    <div>
                        <h3 class="footer-column-title">{"Company"}</h3>
                        {
                            footer.company_links.iter().map(|label| html! {
                                <a class="footer-link" href="#about">{ *label }</a>
                            }).collect::<Html>()
                        }
                    </div>
                    <div>
                        <h3 class="footer-column-title">{"Subscribe"}</h3>
                        <p class="footer-subscribe-hint">
                            {"Get the latest updates on our mission."}
                        </p>
                        <div class="footer-subscribe">
                            <input type="text" placeholder="Email address" />
                            <button>{"Go"}</button>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p class="footer-copyright">{ footer.copyright }</p>
                    <div class="footer-social">
                        {
                            footer.social_links.iter().map(|social| html! {
                                <a href="#">{ *social }</a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </footer>
    }
}
