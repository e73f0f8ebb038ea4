use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::GalleryImage;
use crate::scroll_lock::{BodyOverflow, ScrollLock};
use crate::state::lightbox::LightboxAction;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub image: &'static GalleryImage,
    pub on_action: Callback<LightboxAction>,
}

/// Full-screen viewer. Mounted only while an image is open, so the scroll
/// lock and the key listener live exactly as long as the overlay does.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    {
        let on_action = props.on_action.clone();
        use_effect_with_deps(move |_| {
            let lock = ScrollLock::acquire(BodyOverflow);

            let window = web_sys::window();
            let key_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                on_action.emit(LightboxAction::Key(e.key()));
            }) as Box<dyn FnMut(KeyboardEvent)>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("keydown", key_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("keydown", key_callback.as_ref().unchecked_ref());
                }
                drop(lock);
            }
        }, ());
    }

    let close = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(LightboxAction::Close))
    };

    // The button sits inside the overlay; one click closes once
    let close_button = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_action.emit(LightboxAction::Close);
        })
    };

    // Clicks on the enlarged image must not reach the overlay
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class="lightbox"
            onclick={close}
            role="dialog"
            aria-modal="true"
            aria-label="Image Lightbox"
        >
            <button class="lightbox-close" onclick={close_button} aria-label="Close lightbox">
                <Icon glyph={Glyph::Close} size={32} />
            </button>
            <div class="lightbox-frame">
                <img src={props.image.src} alt={props.image.alt} onclick={keep_open} />
            </div>
        </div>
    }
}
