use chrono::Datelike;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::icons::Icon;
use crate::content::{anchor_for, INFORMATION_LINKS, NAV_LABELS, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let newsletter_email = use_state(String::new);
    let year = chrono::Local::now().year();

    let on_email_input = {
        let newsletter_email = newsletter_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            newsletter_email.set(input.value());
        })
    };

    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">{"SkyVoyage"}</h3>
                        <p class="footer-muted">
                            {"Elevating your journey with premium hot air balloon experiences since 2010."}
                        </p>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|(glyph, name)| html! {
                                <a key={*name} href="#" aria-label={*name}>
                                    <Icon glyph={*glyph} size={20} />
                                </a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul class="footer-links">
                            { for NAV_LABELS.iter().map(|label| html! {
                                <li key={*label}>
                                    <a href={format!("#{}", anchor_for(label))}>{*label}</a>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Information"}</h4>
                        <ul class="footer-links">
                            { for INFORMATION_LINKS.iter().map(|label| html! {
                                <li key={*label}><a href="#">{*label}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Newsletter"}</h4>
                        <p class="footer-muted">
                            {"Subscribe to receive special offers and updates from SkyVoyage Balloons."}
                        </p>
                        <div class="newsletter">
                            <input
                                type="email"
                                placeholder="Your email"
                                value={(*newsletter_email).clone()}
                                oninput={on_email_input}
                            />
                            <button type="button">{"Subscribe"}</button>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} SkyVoyage Balloons. All rights reserved.", year)}</p>
                    <div class="footer-legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <span>{"|"}</span>
                        <a href="#">{"Terms of Service"}</a>
                        <span>{"|"}</span>
                        <a href="#">{"Sitemap"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .site-footer {
        background: #0f172a;
        color: #fff;
        padding: 4rem 0 2rem;
    }

    .footer-inner {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1rem;
    }

    .footer-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
        margin-bottom: 3rem;
    }

    .footer-brand {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }

    .site-footer h4 {
        font-size: 1.125rem;
        font-weight: 600;
        margin-bottom: 1rem;
    }

    .footer-muted {
        color: #cbd5e1;
        margin-bottom: 1rem;
    }

    .footer-social {
        display: flex;
        gap: 1rem;
    }

    .footer-social a {
        color: #fff;
        transition: color 0.3s ease;
    }

    .footer-links {
        list-style: none;
        padding: 0;
        margin: 0;
        display: grid;
        gap: 0.5rem;
    }

    .footer-links a {
        color: #cbd5e1;
        text-decoration: none;
        transition: color 0.3s ease;
    }

    .footer-social a:hover,
    .footer-links a:hover,
    .footer-legal a:hover {
        color: #0ea5e9;
    }

    .newsletter {
        display: flex;
    }

    .newsletter input {
        width: 100%;
        padding: 0.5rem 1rem;
        color: #fff;
        background: #1e293b;
        border: none;
        border-radius: 0.375rem 0 0 0.375rem;
    }

    .newsletter input:focus {
        outline: 1px solid #0ea5e9;
    }

    .newsletter button {
        padding: 0 1rem;
        color: #fff;
        background: #0ea5e9;
        border: none;
        border-radius: 0 0.375rem 0.375rem 0;
        cursor: pointer;
    }

    .newsletter button:hover {
        background: #0369a1;
    }

    .footer-bottom {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: space-between;
        padding-top: 2rem;
        border-top: 1px solid #1e293b;
        font-size: 0.875rem;
        color: #94a3b8;
    }

    .footer-legal {
        display: flex;
        gap: 1rem;
    }

    .footer-legal a {
        color: #94a3b8;
        text-decoration: none;
    }

    @media (min-width: 768px) {
        .footer-grid {
            grid-template-columns: repeat(2, 1fr);
        }

        .footer-bottom {
            flex-direction: row;
        }
    }

    @media (min-width: 1024px) {
        .footer-grid {
            grid-template-columns: repeat(4, 1fr);
        }
    }
"#;
