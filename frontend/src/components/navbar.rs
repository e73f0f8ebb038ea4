use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::session::use_animation_session;
use crate::animation::timeline::{group_span, Timeline};
use crate::animation::tracked::{attached, TrackedGroup};
use crate::animation::tween::{self, Pose, Tween};
use crate::components::icons::{Glyph, Icon};
use crate::config;
use crate::content::{anchor_for, NAV_LABELS};
use crate::error::SetupError;
use crate::state::navigation::{NavAction, NavState};

const DRAWER_DURATION: f64 = 0.3;
const DRAWER_LINK_DURATION: f64 = 0.2;
const DRAWER_LINK_STAGGER: f64 = 0.05;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_reducer(NavState::default);
    let (window_width, _) = use_window_size();

    let logo_ref = use_node_ref();
    let book_ref = use_node_ref();
    let drawer_ref = use_node_ref();
    let desktop_links = use_memo(|_| TrackedGroup::new("desktop nav links", NAV_LABELS.len()), ());
    let drawer_links = use_memo(|_| TrackedGroup::new("drawer links", NAV_LABELS.len()), ());

    {
        let nav = nav.clone();
        use_effect_with_deps(move |_| {
            let listener = match web_sys::window().ok_or(SetupError::NoWindow) {
                Ok(window) => {
                    nav.dispatch(NavAction::Scrolled(window.scroll_y().unwrap_or(0.0)));

                    let scroll_callback = {
                        let window = window.clone();
                        Closure::wrap(Box::new(move || {
                            let scroll_y = window.scroll_y().unwrap_or(0.0);
                            nav.dispatch(NavAction::Scrolled(scroll_y));
                        }) as Box<dyn FnMut()>)
                    };

                    let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    Some((window, scroll_callback))
                }
                Err(err) => {
                    warn!("Header scroll tracking disabled: {}", err);
                    None
                }
            };

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    {
        let nav = nav.clone();
        use_effect_with_deps(move |width| {
            nav.dispatch(NavAction::Resized(*width));
            || ()
        }, window_width);
    }

    // Entrance: logo slides in, links drop in one by one, then the CTA fades in
    {
        let logo_ref = logo_ref.clone();
        let book_ref = book_ref.clone();
        let desktop_links = desktop_links.clone();
        use_animation_session("navigation", (), move |session, _| {
            let logo = attached("navigation logo", &logo_ref)?;
            let book = attached("book now button", &book_ref)?;
            let links = desktop_links.attached()?;

            session.register(tween::set(&[logo.clone()], Pose::hidden_x(-100.0)));
            session.register(tween::set(&links, Pose::hidden_y(-20.0)));
            session.register(tween::set(&[book.clone()], Pose::HIDDEN));

            let mut timeline = Timeline::new();
            let logo_at = timeline.add(1.0, 0.0);
            let links_at = timeline.add(group_span(links.len(), 0.8, 0.1), -0.5);
            let book_at = timeline.add(0.8, -0.5);

            session.register(tween::animate_to(&[logo], Pose::VISIBLE, Tween::new(1.0).delay(logo_at)));
            session.register(tween::animate_to(
                &links,
                Pose::VISIBLE,
                Tween::new(0.8).delay(links_at).stagger(0.1),
            ));
            session.register(tween::animate_to(&[book], Pose::VISIBLE, Tween::new(0.8).delay(book_at)));
            Ok(())
        });
    }

    // Drawer plays forward when opened and in reverse when closed
    {
        let drawer_ref = drawer_ref.clone();
        let drawer_links = drawer_links.clone();
        use_animation_session("navigation drawer", nav.drawer_open, move |session, open| {
            let drawer = attached("navigation drawer", &drawer_ref)?;
            let mut links = drawer_links.attached()?;

            let links_span = group_span(links.len(), DRAWER_LINK_DURATION, DRAWER_LINK_STAGGER);
            let mut timeline = Timeline::new();
            if *open {
                let drawer_at = timeline.add(DRAWER_DURATION, 0.0);
                let links_at = timeline.add(links_span, -0.1);
                let _ = drawer.style().set_property("pointer-events", "auto");
                session.register(tween::animate_to(
                    &[drawer],
                    Pose::VISIBLE,
                    Tween::new(DRAWER_DURATION).delay(drawer_at),
                ));
                session.register(tween::animate_to(
                    &links,
                    Pose::VISIBLE,
                    Tween::new(DRAWER_LINK_DURATION).delay(links_at).stagger(DRAWER_LINK_STAGGER),
                ));
            } else {
                links.reverse();
                let links_at = timeline.add(links_span, 0.0);
                let drawer_at = timeline.add(DRAWER_DURATION, -0.1);
                let _ = drawer.style().set_property("pointer-events", "none");
                session.register(tween::animate_to(
                    &links,
                    Pose::hidden_y(20.0),
                    Tween::new(DRAWER_LINK_DURATION).delay(links_at).stagger(DRAWER_LINK_STAGGER),
                ));
                session.register(tween::animate_to(
                    &[drawer],
                    Pose::hidden_y(-50.0),
                    Tween::new(DRAWER_DURATION).delay(drawer_at),
                ));
            }
            Ok(())
        });
    }

    let toggle_drawer = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleDrawer);
        })
    };

    let close_drawer = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Closing navigation drawer");
            nav.dispatch(NavAction::CloseDrawer);
        })
    };

    let header_class = nav.header.class();

    html! {
        <header class={classes!("site-header", header_class, nav.drawer_open.then(|| "drawer-open"))}>
            <style>{NAVBAR_CSS}</style>
            <div class="nav-content">
                <a href="#" class="nav-logo" ref={logo_ref}>
                    {config::BRAND_NAME}
                </a>

                <nav class="nav-desktop">
                    { for NAV_LABELS.iter().enumerate().map(|(i, label)| html! {
                        <a key={*label} ref={desktop_links.node(i)} href={format!("#{}", anchor_for(label))} class="nav-link">
                            {*label}
                        </a>
                    }) }
                    <a href="#contact" class="button primary nav-book" ref={book_ref}>{"Book Now"}</a>
                </nav>

                <button class="nav-burger" onclick={toggle_drawer} aria-label="Toggle navigation">
                    <Icon glyph={if nav.drawer_open { Glyph::Close } else { Glyph::Menu }} />
                </button>
            </div>

            <div class={classes!("nav-drawer", nav.drawer_open.then(|| "open"))} ref={drawer_ref}>
                <nav class="nav-drawer-links">
                    { for NAV_LABELS.iter().enumerate().map(|(i, label)| html! {
                        <a key={*label}
                            ref={drawer_links.node(i)}
                            href={format!("#{}", anchor_for(label))}
                            class="drawer-link"
                            onclick={close_drawer.clone()}>
                            {*label}
                        </a>
                    }) }
                    <a href="#contact" class="button primary drawer-book" onclick={close_drawer.clone()}>
                        {"Book Now"}
                    </a>
                </nav>
            </div>
        </header>
    }
}

const NAVBAR_CSS: &str = r#"
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        padding: 1.25rem 0;
        background-color: rgba(255, 255, 255, 0);
        transition: padding 0.3s ease, background-color 0.3s ease, box-shadow 0.3s ease;
    }

    .site-header.opaque {
        padding: 0.75rem 0;
        background-color: rgba(255, 255, 255, 1);
        box-shadow: 0 1px 8px rgba(15, 23, 42, 0.08);
    }

    .nav-content {
        max-width: 1280px;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }

    .nav-logo {
        font-weight: 700;
        font-size: 1.5rem;
        color: #fff;
        text-decoration: none;
        transition: color 0.3s ease;
    }

    .nav-desktop {
        display: none;
        align-items: center;
        gap: 1.5rem;
    }

    .nav-link {
        color: #fff;
        text-decoration: none;
        transition: color 0.3s ease;
    }

    .nav-link:hover {
        color: #bae6fd;
    }

    .nav-book {
        margin-left: 1rem;
    }

    .site-header.opaque .nav-logo,
    .site-header.opaque .nav-burger {
        color: #0f172a;
    }

    .site-header.opaque .nav-link {
        color: #334155;
    }

    .site-header.opaque .nav-link:hover {
        color: #0284c7;
    }

    .nav-burger {
        background: none;
        border: none;
        padding: 0.5rem;
        color: #fff;
        cursor: pointer;
        position: relative;
        z-index: 70;
    }

    .nav-drawer {
        position: fixed;
        inset: 0;
        z-index: 60;
        background: #fff;
        opacity: 0;
        transform: translate3d(0px, -50px, 0);
        pointer-events: none;
        overflow-y: auto;
    }

    .site-header.drawer-open .nav-burger {
        color: #0f172a;
    }

    .nav-drawer-links {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1.5rem;
        padding: 6rem 1rem 2rem;
    }

    .drawer-link {
        font-size: 1.125rem;
        font-weight: 500;
        color: #0f172a;
        text-decoration: none;
        opacity: 0;
        transform: translate3d(0px, 20px, 0);
    }

    .drawer-link:hover {
        color: #0284c7;
    }

    .drawer-book {
        width: 100%;
        max-width: 20rem;
        margin-top: 1.5rem;
        text-align: center;
    }

    @media (min-width: 1024px) {
        .nav-desktop {
            display: flex;
        }

        .nav-burger,
        .nav-drawer {
            display: none;
        }
    }
"#;
