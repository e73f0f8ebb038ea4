use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animation::reveal::{reveal_on_scroll, RevealStep};
use crate::animation::session::use_animation_session;
use crate::animation::tracked::{attached, children_of};
use crate::animation::trigger::TriggerStart;
use crate::animation::tween::{Pose, Tween};
use crate::components::icons::{Glyph, Icon};
use crate::content::{participants_label, BOOKING_EXPERIENCES, CONTACT, LAUNCH_MAP_IMAGE, MAX_PARTICIPANTS};
use crate::state::booking::{BookingField, BookingForm};

/// Reads the current value of whichever form control fired the event.
fn control_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(BookingForm::default);
    let heading_ref = use_node_ref();
    let form_ref = use_node_ref();
    let info_ref = use_node_ref();

    {
        let heading_ref = heading_ref.clone();
        let form_ref = form_ref.clone();
        let info_ref = info_ref.clone();
        use_animation_session("Contact", (), move |session, _| {
            let heading = attached("contact heading", &heading_ref)?;
            let form = attached("booking form", &form_ref)?;
            let info = attached("contact details", &info_ref)?;
            let heading_lines = children_of("contact heading", &heading)?;

            reveal_on_scroll(
                session,
                &heading,
                TriggerStart::top(85),
                vec![RevealStep::new(heading_lines, Pose::hidden_y(30.0), Tween::new(0.8).stagger(0.1))],
            )?;
            reveal_on_scroll(
                session,
                &form,
                TriggerStart::top(85),
                vec![RevealStep::new(vec![form.clone()], Pose::hidden_y(50.0), Tween::new(0.9))],
            )?;
            reveal_on_scroll(
                session,
                &info,
                TriggerStart::top(85),
                vec![RevealStep::new(vec![info.clone()], Pose::hidden_y(50.0), Tween::new(0.9).delay(0.1))],
            )
        });
    }

    let update = |field: BookingField| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = control_value(&e) {
                let mut next = (*form).clone();
                next.set(field, value);
                form.set(next);
            }
        })
    };
    let update_text = |field: BookingField| {
        let update = update(field);
        Callback::from(move |e: InputEvent| update.emit(e.into()))
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Booking form submitted, no booking service is connected");
            if let Ok(json) = serde_json::to_string(&*form) {
                debug!("Captured booking request: {}", json);
            }
        })
    };

    html! {
        <section id="contact" class="contact">
            <style>{CONTACT_CSS}</style>
            <div class="section-inner">
                <div class="section-heading" ref={heading_ref}>
                    <h2>{"Book Your Flight"}</h2>
                    <p>
                        {"Ready to experience the adventure of a lifetime? Contact us to book your hot air balloon journey or inquire about our custom packages."}
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="booking-card" ref={form_ref}>
                        <h3>{"Reserve Your Experience"}</h3>
                        <form class="booking-form" onsubmit={on_submit}>
                            <div class="form-row">
                                <div class="form-field">
                                    <label for="name">{"Full Name"}</label>
                                    <input id="name" name="name" placeholder="Your full name"
                                        value={form.name.clone()}
                                        oninput={update_text(BookingField::Name)} />
                                </div>
                                <div class="form-field">
                                    <label for="email">{"Email Address"}</label>
                                    <input id="email" name="email" type="email" placeholder="Your email"
                                        value={form.email.clone()}
                                        oninput={update_text(BookingField::Email)} />
                                </div>
                            </div>
                            <div class="form-row">
                                <div class="form-field">
                                    <label for="phone">{"Phone Number"}</label>
                                    <input id="phone" name="phone" type="tel" placeholder="Your phone number"
                                        value={form.phone.clone()}
                                        oninput={update_text(BookingField::Phone)} />
                                </div>
                                <div class="form-field">
                                    <label for="participants">{"Number of Participants"}</label>
                                    <select id="participants" name="participants" onchange={update(BookingField::Participants)}>
                                        <option value="" selected={form.participants.is_none()}>{"Select number"}</option>
                                        { for (1..=MAX_PARTICIPANTS).map(|count| html! {
                                            <option key={count} value={count.to_string()} selected={form.participants == Some(count)}>
                                                {participants_label(count)}
                                            </option>
                                        }) }
                                    </select>
                                </div>
                            </div>
                            <div class="form-row">
                                <div class="form-field">
                                    <label for="experience">{"Experience Type"}</label>
                                    <select id="experience" name="experience" onchange={update(BookingField::Experience)}>
                                        <option value="" selected={form.experience.is_none()}>{"Select experience"}</option>
                                        { for BOOKING_EXPERIENCES.iter().map(|(value, label)| html! {
                                            <option key={*value} value={*value} selected={form.experience.as_deref() == Some(*value)}>
                                                {*label}
                                            </option>
                                        }) }
                                    </select>
                                </div>
                                <div class="form-field">
                                    <label for="date">{"Preferred Date"}</label>
                                    <input id="date" name="date" type="date"
                                        value={form.date.clone()}
                                        oninput={update_text(BookingField::Date)} />
                                </div>
                            </div>
                            <div class="form-field">
                                <label for="message">{"Special Requests"}</label>
                                <textarea id="message" name="message"
                                    placeholder="Tell us about any special requirements or questions"
                                    value={form.message.clone()}
                                    oninput={update_text(BookingField::Message)} />
                            </div>
                            <button type="submit" class="button primary block">{"Book Your Adventure"}</button>
                        </form>
                    </div>

                    <div ref={info_ref} class="contact-side">
                        <div class="contact-card">
                            <h3>{"Contact Information"}</h3>
                            <div class="contact-lines">
                                <div class="contact-line">
                                    <Icon glyph={Glyph::Phone} size={20} />
                                    <span>{CONTACT.phone}</span>
                                </div>
                                <div class="contact-line">
                                    <Icon glyph={Glyph::Mail} size={20} />
                                    <span>{CONTACT.email}</span>
                                </div>
                                <div class="contact-line">
                                    <Icon glyph={Glyph::MapPin} size={20} />
                                    <span>{CONTACT.address[0]}<br />{CONTACT.address[1]}</span>
                                </div>
                                <div class="contact-line">
                                    <Icon glyph={Glyph::Calendar} size={20} />
                                    <span>{CONTACT.hours[0]}<br />{CONTACT.hours[1]}</span>
                                </div>
                            </div>
                        </div>
                        <div class="contact-map">
                            <img src={LAUNCH_MAP_IMAGE} alt="Approximate launch area map" loading="lazy" />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

const CONTACT_CSS: &str = r#"
    .contact {
        padding: 2rem 1rem 4rem;
        background: #f8fafc;
        scroll-margin-top: 6rem;
    }

    .contact-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 3rem;
    }

    .booking-card {
        padding: 2rem;
        background: #fff;
        border-radius: 0.75rem;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
        will-change: opacity, transform;
    }

    .booking-card h3,
    .contact-card h3 {
        font-size: 1.5rem;
        font-weight: 600;
        margin-bottom: 1.5rem;
    }

    .booking-card h3 {
        color: #0f172a;
    }

    .booking-form {
        display: grid;
        gap: 1.5rem;
    }

    .form-row {
        display: grid;
        grid-template-columns: 1fr;
        gap: 1.5rem;
    }

    .form-field {
        display: grid;
        gap: 0.5rem;
    }

    .form-field label {
        font-size: 0.875rem;
        font-weight: 500;
        line-height: 1;
    }

    .form-field input,
    .form-field select,
    .form-field textarea {
        width: 100%;
        padding: 0.5rem 0.75rem;
        font: inherit;
        border: 1px solid #e2e8f0;
        border-radius: 0.375rem;
        background: #fff;
    }

    .form-field textarea {
        min-height: 5rem;
    }

    .form-field input:focus,
    .form-field select:focus,
    .form-field textarea:focus {
        outline: 2px solid #0ea5e9;
        outline-offset: 1px;
    }

    .contact-side {
        will-change: opacity, transform;
    }

    .contact-card {
        display: flex;
        flex-direction: column;
        justify-content: center;
        min-height: 320px;
        padding: 2rem;
        margin-bottom: 1.5rem;
        color: #fff;
        border-radius: 0.75rem;
        background: linear-gradient(135deg, #0ea5e9, #0369a1);
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }

    .contact-lines {
        display: grid;
        gap: 1rem;
    }

    .contact-line {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
    }

    .contact-line .icon {
        flex-shrink: 0;
        margin-top: 0.25rem;
    }

    .contact-map {
        min-height: 320px;
        overflow: hidden;
        border-radius: 0.75rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }

    .contact-map img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }

    @media (min-width: 768px) {
        .contact {
            padding: 3rem 1rem 6rem;
        }

        .form-row {
            grid-template-columns: 1fr 1fr;
        }
    }

    @media (min-width: 1024px) {
        .contact-grid {
            grid-template-columns: 1fr 1fr;
        }
    }
"#;
