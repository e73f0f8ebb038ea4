use yew::prelude::*;

use crate::animation::reveal::{reveal_on_scroll, RevealStep};
use crate::animation::session::use_animation_session;
use crate::animation::tracked::attached;
use crate::animation::trigger::TriggerStart;
use crate::animation::tween::{Pose, Tween};
use crate::components::icons::{Glyph, Icon};
use crate::content::{FAQS, SAFETY_COMMITMENTS};
use crate::state::accordion::AccordionState;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={props.on_toggle.clone()} aria-expanded={props.open.to_string()}>
                <span>{props.question}</span>
                <span class="faq-chevron"><Icon glyph={Glyph::ChevronDown} size={16} /></span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_reducer(AccordionState::default);
    let left_ref = use_node_ref();
    let right_ref = use_node_ref();

    {
        let left_ref = left_ref.clone();
        let right_ref = right_ref.clone();
        use_animation_session("FAQ", (), move |session, _| {
            let left = attached("safety column", &left_ref)?;
            let right = attached("questions column", &right_ref)?;

            reveal_on_scroll(
                session,
                &left,
                TriggerStart::top(85),
                vec![RevealStep::new(vec![left.clone()], Pose::hidden_y(50.0), Tween::new(0.8))],
            )?;
            reveal_on_scroll(
                session,
                &right,
                TriggerStart::top(85),
                vec![RevealStep::new(vec![right.clone()], Pose::hidden_y(50.0), Tween::new(0.8).delay(0.1))],
            )
        });
    }

    html! {
        <section id="faq" class="faq">
            <style>{FAQ_CSS}</style>
            <div class="section-inner faq-grid">
                <div ref={left_ref} class="faq-column">
                    <div class="safety-title">
                        <Icon glyph={Glyph::ShieldCheck} size={32} class={classes!("accent")} />
                        <h2>{"Safety First"}</h2>
                    </div>
                    <p>
                        {"At SkyVoyager Balloons, your safety is our highest priority. Our perfect safety record is the result of our unwavering commitment to rigorous standards and procedures."}
                    </p>
                    <div class="safety-card">
                        <h3>{"Our Safety Commitment"}</h3>
                        <ul>
                            { for SAFETY_COMMITMENTS.iter().map(|item| html! {
                                <li key={*item}>
                                    <span class="safety-check"><Icon glyph={Glyph::Check} size={16} /></span>
                                    <span>{*item}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <p>
                        {"We only fly when conditions are optimal, and our team is trained to make conservative decisions regarding weather and flight conditions. Your adventure should be thrilling, but never at the expense of safety."}
                    </p>
                </div>

                <div ref={right_ref} class="faq-column">
                    <h2>{"Frequently Asked Questions"}</h2>
                    <div class="faq-list">
                        { for FAQS.iter().enumerate().map(|(i, entry)| {
                            let on_toggle = {
                                let accordion = accordion.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    accordion.dispatch(i);
                                })
                            };
                            html! {
                                <FaqItem
                                    key={i}
                                    question={entry.question}
                                    answer={entry.answer}
                                    open={accordion.is_open(i)}
                                    on_toggle={on_toggle}
                                />
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

const FAQ_CSS: &str = r#"
    .faq {
        padding: 4rem 1rem;
        background: #fff;
        scroll-margin-top: 0.2rem;
    }

    .faq-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 3rem;
    }

    .faq-column {
        will-change: opacity, transform;
    }

    .faq-column h2 {
        font-size: 1.875rem;
        font-weight: 700;
        color: #0f172a;
        margin-bottom: 2rem;
    }

    .faq-column > p {
        color: #334155;
        margin-bottom: 1.5rem;
    }

    .safety-title {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 1.5rem;
    }

    .safety-title h2 {
        margin-bottom: 0;
    }

    .safety-card {
        padding: 1.5rem;
        margin-bottom: 1.5rem;
        background: #f8fafc;
        border-radius: 0.75rem;
    }

    .safety-card h3 {
        font-size: 1.25rem;
        font-weight: 600;
        color: #0f172a;
        margin-bottom: 1rem;
    }

    .safety-card ul {
        list-style: none;
        padding: 0;
        margin: 0;
        display: grid;
        gap: 0.75rem;
    }

    .safety-card li {
        display: flex;
        align-items: flex-start;
        color: #334155;
    }

    .safety-check {
        flex-shrink: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        width: 1.5rem;
        height: 1.5rem;
        margin-right: 0.75rem;
        color: #fff;
        background: #0ea5e9;
        border-radius: 9999px;
    }

    .faq-item {
        border-bottom: 1px solid #e2e8f0;
    }

    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1rem 0;
        font-size: 1rem;
        font-weight: 500;
        text-align: left;
        color: #0f172a;
        background: none;
        border: none;
        cursor: pointer;
    }

    .faq-question:hover {
        color: #0284c7;
    }

    .faq-chevron {
        transition: transform 0.2s ease;
    }

    .faq-item.open .faq-chevron {
        transform: rotate(180deg);
    }

    .faq-answer {
        max-height: 0;
        overflow: hidden;
        color: #334155;
        transition: max-height 0.3s ease;
    }

    .faq-item.open .faq-answer {
        max-height: 20rem;
        padding-bottom: 1rem;
    }

    @media (min-width: 1024px) {
        .faq {
            padding: 6rem 1rem;
        }

        .faq-grid {
            grid-template-columns: 1fr 1fr;
            gap: 4rem;
        }
    }
"#;
