use yew::prelude::*;

use crate::animation::reveal::{reveal_on_scroll, RevealStep};
use crate::animation::session::use_animation_session;
use crate::animation::tracked::{attached, children_of, TrackedGroup};
use crate::animation::trigger::TriggerStart;
use crate::animation::tween::{Pose, Tween};
use crate::components::lightbox::Lightbox;
use crate::content::{ImageSpan, GALLERY_IMAGES};
use crate::state::lightbox::{LightboxAction, LightboxState};

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let lightbox = use_reducer(LightboxState::default);
    let section_ref = use_node_ref();
    let heading_ref = use_node_ref();
    let grid_ref = use_node_ref();
    let items = use_memo(|_| TrackedGroup::new("gallery items", GALLERY_IMAGES.len()), ());

    {
        let section_ref = section_ref.clone();
        let heading_ref = heading_ref.clone();
        let grid_ref = grid_ref.clone();
        let items = items.clone();
        use_animation_session("Gallery", (), move |session, _| {
            let section = attached("gallery section", &section_ref)?;
            let heading = attached("gallery heading", &heading_ref)?;
            let grid = attached("gallery grid", &grid_ref)?;
            let heading_lines = children_of("gallery heading", &heading)?;
            let items = items.attached()?;

            reveal_on_scroll(
                session,
                &section,
                TriggerStart::top(80),
                vec![RevealStep::new(heading_lines, Pose::hidden_y(30.0), Tween::new(0.8).stagger(0.15))],
            )?;
            reveal_on_scroll(
                session,
                &grid,
                TriggerStart::top(85),
                vec![RevealStep::new(items, Pose::hidden_y(50.0), Tween::new(0.6).stagger(0.1))],
            )
        });
    }

    let on_action = {
        let lightbox = lightbox.clone();
        Callback::from(move |action: LightboxAction| lightbox.dispatch(action))
    };

    html! {
        <section id="gallery" class="gallery" ref={section_ref}>
            <style>{GALLERY_CSS}</style>
            <div class="section-inner">
                <div class="section-heading" ref={heading_ref}>
                    <h2>{"Gallery"}</h2>
                    <p>{"Glimpses of the extraordinary experiences that await you high above the ground."}</p>
                </div>

                <div class="gallery-grid" ref={grid_ref}>
                    { for GALLERY_IMAGES.iter().enumerate().map(|(i, image)| {
                        let open = {
                            let on_action = on_action.clone();
                            Callback::from(move |_: MouseEvent| on_action.emit(LightboxAction::Open(image)))
                        };
                        html! {
                            <div
                                key={image.src}
                                ref={items.node(i)}
                                class={classes!("gallery-item", (image.span == ImageSpan::Wide).then(|| "wide"))}
                                onclick={open}
                            >
                                <img src={image.src} alt={image.alt} loading="lazy" />
                            </div>
                        }
                    }) }
                </div>

                {
                    match *lightbox {
                        LightboxState::Open(image) => html! {
                            <Lightbox image={image} on_action={on_action.clone()} />
                        },
                        LightboxState::Closed => html! {},
                    }
                }
            </div>
        </section>
    }
}

const GALLERY_CSS: &str = r#"
    .gallery {
        padding: 0.25rem 1rem;
        background: #fff;
        scroll-margin-top: 6rem;
    }

    .gallery-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 1rem;
    }

    .gallery-item {
        position: relative;
        height: 16rem;
        overflow: hidden;
        border-radius: 0.5rem;
        cursor: pointer;
        transition: transform 0.3s ease-in-out;
        will-change: transform, opacity;
    }

    .gallery-item:hover {
        transform: scale(1.02);
    }

    .gallery-item img {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
    }

    .lightbox {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        background: rgba(0, 0, 0, 0.9);
        backdrop-filter: blur(4px);
    }

    .lightbox-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        z-index: 10;
        padding: 0.5rem;
        color: #fff;
        background: none;
        border: none;
        cursor: pointer;
        transition: color 0.2s ease;
    }

    .lightbox-close:hover {
        color: #7dd3fc;
    }

    .lightbox-frame {
        position: relative;
        max-width: 100%;
        max-height: 90vh;
    }

    .lightbox-frame img {
        display: block;
        max-width: 100%;
        max-height: 90vh;
        object-fit: contain;
    }

    @media (min-width: 768px) {
        .gallery {
            padding: 3rem 1rem 6rem;
        }

        .gallery-grid {
            grid-template-columns: repeat(2, 1fr);
        }

        .gallery-item.wide {
            grid-column: span 2;
        }
    }

    @media (min-width: 1024px) {
        .gallery-grid {
            grid-template-columns: repeat(3, 1fr);
        }
    }
"#;
