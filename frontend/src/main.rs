use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod error;
mod scroll_lock;
mod viewport;
mod animation {
    pub mod counter;
    pub mod easing;
    pub mod reveal;
    pub mod session;
    pub mod timeline;
    pub mod tracked;
    pub mod trigger;
    pub mod tween;
}
mod state {
    pub mod accordion;
    pub mod booking;
    pub mod lightbox;
    pub mod navigation;
}
mod components {
    pub mod footer;
    pub mod icons;
    pub mod lightbox;
    pub mod navbar;
}
mod sections {
    pub mod contact;
    pub mod experiences;
    pub mod faq;
    pub mod gallery;
    pub mod hero;
    pub mod our_story;
    pub mod testimonials;
}
mod pages {
    pub mod home;
}

use components::footer::Footer;
use components::navbar::Navbar;
use pages::home::Home;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{GLOBAL_CSS}</style>
            <Navbar />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}


const GLOBAL_CSS: &str = r#"
    *, *::before, *::after {
        box-sizing: border-box;
        margin: 0;
        padding: 0;
    }

    html {
        scroll-behavior: smooth;
    }

    body {
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
        line-height: 1.6;
        color: #1e293b;
        background: #fff;
        overflow-x: hidden;
    }

    img {
        display: block;
        max-width: 100%;
    }

    a {
        color: inherit;
        text-decoration: none;
    }

    .section-inner {
        max-width: 1280px;
        margin: 0 auto;
    }

    .section-heading {
        max-width: 48rem;
        margin: 0 auto 3rem;
        text-align: center;
    }

    .section-heading h2 {
        font-size: 1.875rem;
        font-weight: 700;
        color: #0f172a;
        margin-bottom: 1rem;
    }

    .section-heading p {
        font-size: 1.125rem;
        color: #475569;
    }

    .accent {
        color: #0ea5e9;
    }

    .icon {
        display: inline-block;
        vertical-align: middle;
    }

    .button {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 0.625rem 1.25rem;
        font: inherit;
        font-weight: 500;
        border-radius: 0.375rem;
        border: 1px solid transparent;
        cursor: pointer;
        transition: background-color 0.2s ease, color 0.2s ease;
    }

    .button.primary {
        color: #fff;
        background: #0ea5e9;
    }

    .button.primary:hover {
        background: #0284c7;
    }

    .button.outline {
        color: #fff;
        background: transparent;
        border-color: #fff;
    }

    .button.outline:hover {
        background: rgba(255, 255, 255, 0.1);
    }

    .button.large {
        padding: 0.875rem 2rem;
        font-size: 1.125rem;
    }

    .button.small {
        padding: 0.375rem 0.875rem;
        font-size: 0.875rem;
    }

    .button.block {
        width: 100%;
    }

    @media (min-width: 768px) {
        .section-heading h2 {
            font-size: 2.25rem;
        }
    }
"#;
