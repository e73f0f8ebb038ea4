use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::HERO_IMAGE;

/// Smoothly scrolls to the section with `id`. Missing sections are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        debug!("No section #{} to scroll to", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

fn scroll_callback(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| scroll_to_section(id))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-backdrop">
                <div class="hero-shade"></div>
                <img
                    src={HERO_IMAGE}
                    alt="Hot air balloons flying over landscape at sunrise"
                    loading="eager"
                />
            </div>

            <div class="hero-content">
                <h1>
                    <span class="fade-in" style="animation-delay: 0.2s">{"Elevate Your Journey"}</span>
                    <span class="fade-in hero-accent" style="animation-delay: 0.4s">{"One Balloon Ride at a Time"}</span>
                </h1>
                <p class="fade-in" style="animation-delay: 0.6s">
                    {"Experience the breathtaking beauty of the world from above with our premium hot air balloon adventures."}
                </p>
                <div class="hero-actions fade-in" style="animation-delay: 0.8s">
                    <button class="button primary large" onclick={scroll_callback("contact")}>
                        {"Book Your Flight"}
                    </button>
                    <button class="button outline large" onclick={scroll_callback("experiences")}>
                        {"Explore Packages"}
                    </button>
                </div>
            </div>

            <button class="hero-scroll" onclick={scroll_callback("our-story")} aria-label="Scroll to next section">
                <Icon glyph={Glyph::ChevronDown} size={40} />
            </button>
        </section>
    }
}

const HERO_CSS: &str = r#"
    @keyframes heroFadeIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }

    @keyframes heroBounce {
        0%, 100% { transform: translate(-50%, -25%); }
        50% { transform: translate(-50%, 0); }
    }

    .hero {
        position: relative;
        display: flex;
        align-items: center;
        justify-content: center;
        min-height: 100vh;
        overflow: hidden;
        scroll-margin-top: 6rem;
    }

    .hero-backdrop {
        position: absolute;
        inset: 0;
        background: #000;
    }

    .hero-backdrop img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }

    .hero-shade {
        position: absolute;
        inset: 0;
        z-index: 1;
        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.4), rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.7));
    }

    .hero-content {
        position: relative;
        z-index: 2;
        padding: 0 1rem;
        text-align: center;
        color: #fff;
    }

    .hero h1 {
        font-size: clamp(2.25rem, 6vw, 4.5rem);
        font-weight: 700;
        line-height: 1.1;
        margin-bottom: 1.5rem;
    }

    .hero h1 span {
        display: block;
    }

    .hero-accent {
        margin-top: 1rem;
        color: #bae6fd;
    }

    .hero p {
        max-width: 48rem;
        margin: 0 auto 2rem;
        font-size: clamp(1.125rem, 2vw, 1.5rem);
    }

    .fade-in {
        opacity: 0;
        animation: heroFadeIn 1s ease-out forwards;
    }

    .hero-actions {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1rem;
    }

    .hero-scroll {
        position: absolute;
        z-index: 2;
        bottom: 2rem;
        left: 50%;
        color: #fff;
        background: none;
        border: none;
        cursor: pointer;
        animation: heroBounce 1s infinite;
    }
"#;
