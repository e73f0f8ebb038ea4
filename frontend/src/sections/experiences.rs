use yew::prelude::*;

use crate::animation::reveal::{reveal_on_scroll, RevealStep};
use crate::animation::session::use_animation_session;
use crate::animation::timeline::{group_span, Timeline};
use crate::animation::tracked::{attached, TrackedGroup};
use crate::animation::trigger::TriggerStart;
use crate::animation::tween::{Pose, Tween};
use crate::components::icons::Icon;
use crate::content::EXPERIENCES;
use crate::viewport::use_viewport_bucket;

#[function_component(Experiences)]
pub fn experiences() -> Html {
    let bucket = use_viewport_bucket();
    let section_ref = use_node_ref();
    let button_ref = use_node_ref();
    let cards = use_memo(|_| TrackedGroup::new("experience cards", EXPERIENCES.len()), ());

    {
        let section_ref = section_ref.clone();
        let button_ref = button_ref.clone();
        let cards = cards.clone();
        use_animation_session("Experience", bucket, move |session, bucket| {
            let section = attached("experience section", &section_ref)?;
            let cards = cards.attached()?;
            let button = attached("view all button", &button_ref)?;

            let mobile = bucket.is_mobile();
            let rise = if mobile { 50.0 } else { 30.0 };
            let duration = if mobile { 0.6 } else { 0.8 };
            let stagger = if mobile { 0.2 } else { 0.1 };

            let mut timeline = Timeline::new();
            timeline.add(group_span(cards.len(), duration, stagger), 0.0);
            let button_at = timeline.add(0.5, -0.3);

            reveal_on_scroll(
                session,
                &section,
                TriggerStart::top(if mobile { 90 } else { 80 }),
                vec![
                    RevealStep::new(cards, Pose::hidden_y(rise), Tween::new(duration).stagger(stagger)),
                    RevealStep::new(vec![button], Pose::hidden_y(rise), Tween::new(0.5).delay(button_at)),
                ],
            )
        });
    }

    html! {
        <section id="experiences" class="experiences section" ref={section_ref}>
            <style>{EXPERIENCES_CSS}</style>
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Flight Experiences"}</h2>
                    <p>
                        {"Choose from our curated selection of hot air balloon experiences, each designed to offer a unique perspective on the breathtaking landscapes below."}
                    </p>
                </div>

                <div class="experience-grid">
                    { for EXPERIENCES.iter().enumerate().map(|(i, exp)| html! {
                        <div key={exp.slug} class={classes!("experience-card", exp.accent)} ref={cards.node(i)}>
                            <div class="experience-media">
                                <img src={exp.image} alt={exp.title} loading="lazy" />
                            </div>
                            <div class="experience-body">
                                <div class="experience-icon">
                                    <Icon glyph={exp.icon} />
                                </div>
                                <h3>{exp.title}</h3>
                                <p>{exp.description}</p>
                                <div class="experience-footer">
                                    <span class="experience-price">{format!("Starting at {}", exp.price)}</span>
                                    <a href="#contact" class="button primary small">{"Book Now"}</a>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="experience-more" ref={button_ref}>
                    <a href="#contact" class="button primary large">{"View All Experiences"}</a>
                </div>
            </div>
        </section>
    }
}

const EXPERIENCES_CSS: &str = r#"
    .experiences {
        background: #f8fafc;
    }

    .experience-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }

    .experience-card {
        border-radius: 0.75rem;
        overflow: hidden;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
        transition: box-shadow 0.3s ease;
        will-change: transform, opacity;
    }

    .experience-card:hover {
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    }

    .experience-card.sunset { background: linear-gradient(135deg, #fff, rgba(253, 186, 116, 0.3)); }
    .experience-card.sky { background: linear-gradient(135deg, #fff, rgba(125, 211, 252, 0.3)); }
    .experience-card.earth { background: linear-gradient(135deg, #fff, rgba(214, 180, 140, 0.3)); }
    .experience-card.forest { background: linear-gradient(135deg, #fff, rgba(134, 239, 172, 0.3)); }

    .experience-media {
        aspect-ratio: 16 / 9;
        overflow: hidden;
    }

    .experience-media img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.5s ease;
    }

    .experience-media img:hover {
        transform: scale(1.05);
    }

    .experience-body {
        padding: 1.5rem;
    }

    .experience-icon {
        display: inline-block;
        padding: 0.75rem;
        margin-bottom: 1rem;
        border-radius: 9999px;
        background: #fff;
        color: #0369a1;
    }

    .sunset .experience-icon { background: #ffedd5; color: #c2410c; }
    .earth .experience-icon { background: #f5ebe0; color: #7c5a3a; }
    .forest .experience-icon { background: #dcfce7; color: #15803d; }

    .experience-body h3 {
        font-size: 1.25rem;
        font-weight: 700;
        color: #0f172a;
        margin-bottom: 0.75rem;
    }

    .experience-body p {
        color: #475569;
        margin-bottom: 1rem;
    }

    .experience-footer {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-top: 1.5rem;
    }

    .experience-price {
        font-size: 1.25rem;
        font-weight: 700;
        color: #0f172a;
    }

    .experience-more {
        margin-top: 3rem;
        text-align: center;
        will-change: transform, opacity;
    }

    @media (min-width: 768px) {
        .experience-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
"#;
