use yew::prelude::*;

use crate::sections::contact::Contact;
use crate::sections::experiences::Experiences;
use crate::sections::faq::Faq;
use crate::sections::gallery::Gallery;
use crate::sections::hero::Hero;
use crate::sections::our_story::OurStory;
use crate::sections::testimonials::Testimonials;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <Hero />
            <OurStory />
            <Experiences />
            <Gallery />
            <Testimonials />
            <Faq />
            <Contact />
        </main>
    }
}
