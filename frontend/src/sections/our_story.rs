use yew::prelude::*;

use crate::animation::counter::{self, CounterTween};
use crate::animation::easing::Ease;
use crate::animation::reveal::{reveal_on_scroll, RevealStep};
use crate::animation::session::use_animation_session;
use crate::animation::timeline::Timeline;
use crate::animation::tracked::{attached, TrackedGroup};
use crate::animation::trigger::{ScrollTrigger, TriggerStart};
use crate::animation::tween::{Pose, Tween};
use crate::content::{STATS, STORY_IMAGE};
use crate::viewport::{use_viewport_bucket, ViewportBucket};

/// Animation parameters for the story section at one viewport size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StoryMotion {
    pub main_start: u8,
    pub content_x: f64,
    pub image_x: f64,
    pub rise: f64,
    pub slide_duration: f64,
    pub stats_start: u8,
    pub stats_stagger: f64,
    pub stats_duration: f64,
    pub quote_start: u8,
    pub quote_duration: f64,
    pub counter_start: u8,
    pub counter_duration: f64,
    pub counter_step: f64,
}

impl StoryMotion {
    pub fn for_bucket(bucket: ViewportBucket) -> Self {
        Self {
            main_start: bucket.pick(90, 85, 75, 70),
            content_x: bucket.pick(-20.0, -30.0, -50.0, -60.0),
            image_x: bucket.pick(20.0, 30.0, 50.0, 60.0),
            rise: bucket.pick(15.0, 20.0, 30.0, 35.0),
            slide_duration: bucket.pick(0.6, 0.7, 0.8, 0.8),
            stats_start: bucket.pick(85, 80, 75, 70),
            stats_stagger: bucket.pick(0.15, 0.12, 0.1, 0.1),
            stats_duration: bucket.pick(0.4, 0.5, 0.6, 0.7),
            quote_start: bucket.pick(90, 85, 80, 75),
            quote_duration: bucket.pick(0.5, 0.6, 0.7, 0.8),
            counter_start: bucket.pick(80, 70, 60, 55),
            counter_duration: bucket.pick(1.5, 2.0, 2.5, 3.0),
            counter_step: if bucket.is_mobile() { 0.1 } else { 0.2 },
        }
    }

    pub fn counter(&self, index: usize, target: u32) -> CounterTween {
        CounterTween {
            target,
            duration: self.counter_duration,
            delay: index as f64 * self.counter_step,
            ease: Ease::Power1InOut,
        }
    }
}

#[function_component(OurStory)]
pub fn our_story() -> Html {
    let bucket = use_viewport_bucket();
    let section_ref = use_node_ref();
    let image_ref = use_node_ref();
    let content_ref = use_node_ref();
    let stats_ref = use_node_ref();
    let quote_ref = use_node_ref();
    let stat_cards = use_memo(|_| TrackedGroup::new("story stat cards", STATS.len()), ());
    let numbers = use_memo(|_| TrackedGroup::new("story counters", STATS.len()), ());

    {
        let section_ref = section_ref.clone();
        let image_ref = image_ref.clone();
        let content_ref = content_ref.clone();
        let stats_ref = stats_ref.clone();
        let quote_ref = quote_ref.clone();
        let stat_cards = stat_cards.clone();
        let numbers = numbers.clone();
        use_animation_session("Our story", bucket, move |session, bucket| {
            let section = attached("story section", &section_ref)?;
            let image = attached("story image", &image_ref)?;
            let content = attached("story content", &content_ref)?;
            let stats = attached("story stats", &stats_ref)?;
            let quote = attached("story quote", &quote_ref)?;
            let cards = stat_cards.attached()?;
            let numbers = numbers.attached()?;

            let motion = StoryMotion::for_bucket(*bucket);

            let mut timeline = Timeline::new();
            let image_at = timeline.add(motion.slide_duration, 0.0);
            let content_at = timeline.add(motion.slide_duration, -0.4);
            reveal_on_scroll(
                session,
                &section,
                TriggerStart::top(motion.main_start),
                vec![
                    RevealStep::new(
                        vec![image],
                        Pose::hidden_x(motion.image_x),
                        Tween::new(motion.slide_duration).delay(image_at),
                    ),
                    RevealStep::new(
                        vec![content],
                        Pose::hidden_x(motion.content_x),
                        Tween::new(motion.slide_duration).delay(content_at),
                    ),
                ],
            )?;

            let stats_trigger = if bucket.is_mobile() { &stats } else { &section };
            reveal_on_scroll(
                session,
                stats_trigger,
                TriggerStart::top(motion.stats_start),
                vec![RevealStep::new(
                    cards,
                    Pose::hidden_y(motion.rise),
                    Tween::new(motion.stats_duration)
                        .stagger(motion.stats_stagger)
                        .ease(Ease::BackOut),
                )],
            )?;

            reveal_on_scroll(
                session,
                &quote,
                TriggerStart::top(motion.quote_start),
                vec![RevealStep::new(
                    vec![quote.clone()],
                    Pose::hidden_y(motion.rise),
                    Tween::new(motion.quote_duration).ease(Ease::Power1Out),
                )],
            )?;

            let weak = session.downgrade();
            let counters = ScrollTrigger::create(&section, TriggerStart::top(motion.counter_start), move || {
                for ((index, element), stat) in numbers.into_iter().enumerate().zip(STATS) {
                    weak.register(counter::start(element, stat.suffix, motion.counter(index, stat.value)));
                }
            })?;
            session.register(counters);
            Ok(())
        });
    }

    html! {
        <section id="our-story" class="story" ref={section_ref}>
            <style>{STORY_CSS}</style>
            <div class="story-grid">
                <div class="story-content" ref={content_ref}>
                    <h2>{"Our "}<span class="accent">{"Story"}</span></h2>
                    <p>
                        {"Founded in 2010 by a team of passionate aviation enthusiasts and adventure seekers, SkyVoyager Balloons was born from a simple desire: to share the magic of hot air ballooning with the world."}
                    </p>
                    <p>
                        {"What began as a single balloon and a dream has blossomed into the region's premier hot air balloon experience company, with a fleet of state-of-the-art balloons and a perfect safety record."}
                    </p>
                    <p>
                        {"Our experienced pilots, each with thousands of flight hours, are storytellers, naturalists, and guides who enhance your journey."}
                    </p>

                    <div class="story-stats" ref={stats_ref}>
                        { for STATS.iter().enumerate().map(|(i, stat)| html! {
                            <div key={stat.label} class="stat-card" ref={stat_cards.node(i)}>
                                <span class="stat-value" ref={numbers.node(i)}>{"0"}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="story-media" ref={image_ref}>
                    <img alt="Our balloon fleet" src={STORY_IMAGE} />
                    <div class="story-quote" ref={quote_ref}>
                        <p class="quote-text">{"\"Every flight creates memories that last a lifetime.\""}</p>
                        <p class="quote-author">{"— Michael Reynolds, Founder"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

const STORY_CSS: &str = r#"
    .story {
        padding: 4rem 1rem;
        overflow: hidden;
        background: #fff;
    }

    .story-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 1fr;
        align-items: center;
        gap: 2.5rem;
    }

    .story-content {
        order: 2;
    }

    .story-content h2 {
        font-size: clamp(1.875rem, 4vw, 3rem);
        font-weight: 700;
        color: #0f172a;
        margin-bottom: 1.5rem;
    }

    .story-content p {
        color: #334155;
        line-height: 1.7;
        margin-bottom: 1rem;
    }

    .story-stats {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        margin-top: 2rem;
    }

    .stat-card {
        flex: 1;
        min-width: 110px;
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 1rem;
        background: #f0f9ff;
        border-radius: 0.75rem;
    }

    .stat-value {
        font-size: clamp(1.5rem, 3vw, 2.25rem);
        font-weight: 700;
        background: linear-gradient(to right, #0ea5e9, #0284c7);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }

    .stat-label {
        margin-top: 0.5rem;
        font-size: 0.875rem;
        text-align: center;
        color: #475569;
    }

    .story-media {
        order: 1;
        position: relative;
    }

    .story-media img {
        width: 100%;
        height: auto;
        border-radius: 0.75rem;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        transition: transform 0.3s ease;
    }

    .story-media img:hover {
        transform: scale(1.05);
    }

    .story-quote {
        display: none;
        position: absolute;
        right: -1rem;
        bottom: -1rem;
        max-width: 280px;
        padding: 1.5rem;
        background: #fff;
        border: 1px solid #f1f5f9;
        border-radius: 0.75rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }

    .quote-text {
        font-style: italic;
        font-weight: 500;
        color: #334155;
    }

    .quote-author {
        margin-top: 0.75rem;
        font-size: 0.875rem;
        font-weight: 600;
        color: #0284c7;
    }

    @media (min-width: 640px) {
        .story-quote {
            display: block;
        }
    }

    @media (min-width: 768px) {
        .story {
            padding: 6rem 2rem;
        }

        .story-grid {
            grid-template-columns: 1fr 1fr;
            gap: 4rem;
        }

        .story-content {
            order: 1;
        }

        .story-media {
            order: 2;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_come_from_opposite_sides() {
        for bucket in [
            ViewportBucket::Mobile,
            ViewportBucket::Tablet,
            ViewportBucket::Desktop,
            ViewportBucket::LargeDesktop,
        ] {
            let motion = StoryMotion::for_bucket(bucket);
            assert!(motion.content_x < 0.0);
            assert_eq!(motion.image_x, -motion.content_x);
        }
    }

    #[test]
    fn counters_start_one_step_apart() {
        let mobile = StoryMotion::for_bucket(ViewportBucket::Mobile);
        assert!((mobile.counter(2, 15).delay - 0.2).abs() < 1e-9);
        let desktop = StoryMotion::for_bucket(ViewportBucket::Desktop);
        assert!((desktop.counter(2, 15).delay - 0.4).abs() < 1e-9);
        assert_eq!(desktop.counter(0, 5000).duration, 2.5);
    }
}
