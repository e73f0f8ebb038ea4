use yew::prelude::*;

use crate::animation::reveal::{reveal_on_scroll, RevealStep};
use crate::animation::session::use_animation_session;
use crate::animation::tracked::{attached, children_of, TrackedGroup};
use crate::animation::trigger::TriggerStart;
use crate::animation::tween::{Pose, Tween};
use crate::components::icons::{Glyph, Icon};
use crate::content::TESTIMONIALS;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let heading_ref = use_node_ref();
    let grid_ref = use_node_ref();
    let cards = use_memo(|_| TrackedGroup::new("testimonial cards", TESTIMONIALS.len()), ());

    {
        let heading_ref = heading_ref.clone();
        let grid_ref = grid_ref.clone();
        let cards = cards.clone();
        use_animation_session("Testimonials", (), move |session, _| {
            let heading = attached("testimonials heading", &heading_ref)?;
            let grid = attached("testimonials grid", &grid_ref)?;
            let heading_lines = children_of("testimonials heading", &heading)?;
            let cards = cards.attached()?;

            reveal_on_scroll(
                session,
                &heading,
                TriggerStart::top(85),
                vec![RevealStep::new(heading_lines, Pose::hidden_y(30.0), Tween::new(0.8).stagger(0.1))],
            )?;
            reveal_on_scroll(
                session,
                &grid,
                TriggerStart::top(80),
                vec![RevealStep::new(cards, Pose::hidden_y(50.0), Tween::new(0.6).stagger(0.15))],
            )
        });
    }

    html! {
        <section id="testimonials" class="testimonials">
            <style>{TESTIMONIALS_CSS}</style>
            <div class="section-inner">
                <div class="section-heading" ref={heading_ref}>
                    <h2>{"Customer Testimonials"}</h2>
                    <p>{"Hear what our guests have to say about their unforgettable journey above the clouds."}</p>
                </div>

                <div class="testimonial-grid" ref={grid_ref}>
                    { for TESTIMONIALS.iter().enumerate().map(|(i, testimonial)| html! {
                        <div key={testimonial.author} class="testimonial-card" ref={cards.node(i)}>
                            <div class="testimonial-stars">
                                { for testimonial.stars().map(|filled| html! {
                                    <Icon
                                        glyph={Glyph::Star}
                                        size={20}
                                        filled={filled}
                                        class={classes!(if filled { "star-filled" } else { "star-empty" })}
                                    />
                                }) }
                            </div>
                            <p class="testimonial-quote">{format!("\"{}\"", testimonial.quote)}</p>
                            <div class="testimonial-author">
                                <img src={testimonial.image} alt={testimonial.author} loading="lazy" />
                                <div>
                                    <p class="author-name">{testimonial.author}</p>
                                    <p class="author-location">{testimonial.location}</p>
                                </div>
                            </div>
                            <div class="testimonial-mark">{"\""}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

const TESTIMONIALS_CSS: &str = r#"
    .testimonials {
        padding: 0.25rem 1rem;
        background: #f8fafc;
        scroll-margin-top: 6rem;
    }

    .testimonial-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 2rem;
    }

    .testimonial-card {
        position: relative;
        padding: 1.5rem;
        background: #fff;
        border-radius: 0.75rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
        will-change: opacity, transform;
    }

    .testimonial-stars {
        display: flex;
        margin-bottom: 1rem;
    }

    .star-filled {
        color: #facc15;
    }

    .star-empty {
        color: #cbd5e1;
    }

    .testimonial-quote {
        margin-bottom: 1.5rem;
        font-style: italic;
        color: #334155;
    }

    .testimonial-author {
        display: flex;
        align-items: center;
    }

    .testimonial-author img {
        width: 3rem;
        height: 3rem;
        margin-right: 1rem;
        border-radius: 9999px;
        object-fit: cover;
    }

    .author-name {
        font-weight: 600;
        color: #0f172a;
    }

    .author-location {
        font-size: 0.875rem;
        color: #64748b;
    }

    .testimonial-mark {
        position: absolute;
        top: -1.25rem;
        left: -1.25rem;
        width: 2.5rem;
        height: 2.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-family: Georgia, serif;
        font-size: 1.875rem;
        font-weight: 700;
        color: #f0f9ff;
        background: #0ea5e9;
        border-radius: 9999px;
    }

    @media (min-width: 768px) {
        .testimonials {
            padding: 3.75rem 1rem;
        }

        .testimonial-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }

    @media (min-width: 1024px) {
        .testimonial-grid {
            grid-template-columns: repeat(3, 1fr);
        }
    }
"#;
