//! Copy and imagery for every section of the page.

use crate::animation::counter::CounterSuffix;
use crate::components::icons::Glyph;

#[derive(Debug, PartialEq)]
pub struct Experience {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub image: &'static str,
    pub icon: Glyph,
    /// CSS modifier picking the card's tint.
    pub accent: &'static str,
}

pub static EXPERIENCES: &[Experience] = &[
    Experience {
        slug: "sunrise",
        title: "Sunrise Adventure",
        description: "Experience the magic of dawn as you gently rise with the sun, witnessing the world awakening below in a tapestry of colors.",
        price: "$299",
        image: "https://images.unsplash.com/photo-1500534623283-312aade485b7?q=80&w=2070&auto=format&fit=crop",
        icon: Glyph::Sunrise,
        accent: "sunset",
    },
    Experience {
        slug: "private",
        title: "Private Charter",
        description: "An exclusive journey for you and your loved ones. Customize your flight path and enjoy a premium experience with champagne service.",
        price: "$799",
        image: "https://images.unsplash.com/photo-1541410965313-d53b3c16ef17?auto=format&fit=crop&w=2340&q=80",
        icon: Glyph::Users,
        accent: "sky",
    },
    Experience {
        slug: "proposal",
        title: "Proposal Package",
        description: "Create the perfect moment for your special question, with breathtaking views and our dedicated team to help plan every detail.",
        price: "$999",
        image: "https://images.unsplash.com/photo-1528127269322-539801943592?auto=format&fit=crop&w=2340&q=80",
        icon: Glyph::Heart,
        accent: "earth",
    },
    Experience {
        slug: "mountain",
        title: "Mountain Vista Tour",
        description: "Soar above majestic mountain peaks and experience breathtaking panoramic views of pristine wilderness and alpine landscapes.",
        price: "$449",
        image: "https://images.unsplash.com/photo-1486870591958-9b9d0d1dda99?auto=format&fit=crop&w=2340&q=80",
        icon: Glyph::Mountain,
        accent: "forest",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSpan {
    Wide,
    Standard,
}

#[derive(Debug, PartialEq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub span: ImageSpan,
}

pub static GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage {
        src: "https://images.unsplash.com/photo-1724155840929-4c51c3061d45?q=80&w=1932&auto=format&fit=crop",
        alt: "Colorful hot air balloons at sunrise",
        span: ImageSpan::Wide,
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1453872302360-eed3c5f8ff66?auto=format&fit=crop&w=2340&q=80",
        alt: "Flying over mountains in a hot air balloon",
        span: ImageSpan::Standard,
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1495819427834-1954f20ebb97?auto=format&fit=crop&w=2340&q=80",
        alt: "Inside view from hot air balloon basket",
        span: ImageSpan::Standard,
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1662914055707-5c6337a018f4?q=80&w=1932&auto=format&fit=crop",
        alt: "Hot air balloon festival with many balloons",
        span: ImageSpan::Wide,
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1723293321357-120f918df227?q=80&w=2070&auto=format&fit=crop",
        alt: "Glowing hot air balloons against night sky",
        span: ImageSpan::Standard,
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1670236272849-21f1b9d94149?q=80&w=2071&auto=format&fit=crop",
        alt: "Balloon silhouette against colorful sunset",
        span: ImageSpan::Standard,
    },
];

pub const MAX_RATING: u8 = 5;

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub location: &'static str,
    pub rating: u8,
    pub image: &'static str,
}

impl Testimonial {
    /// Filled then empty stars, always `MAX_RATING` in total.
    pub fn stars(&self) -> impl Iterator<Item = bool> {
        let filled = self.rating.min(MAX_RATING);
        (0..MAX_RATING).map(move |i| i < filled)
    }
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The sunrise balloon ride was absolutely breathtaking. The staff was professional, friendly, and made us feel completely safe. A bucket list experience I'll remember forever!",
        author: "Emily Johnson",
        location: "Denver, CO",
        rating: 5,
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&w=986&q=80",
    },
    Testimonial {
        quote: "My husband proposed during our private charter flight and it was magical! The team helped him plan every detail, from the champagne toast to capturing photos of the moment. Simply perfect.",
        author: "Sarah Williams",
        location: "Portland, OR",
        rating: 5,
        image: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?auto=format&fit=crop&w=2064&q=80",
    },
    Testimonial {
        quote: "As a photographer, I was blown away by the perspectives and light during the sunrise flight. The pilot positioned us perfectly for the best shots. Worth every penny!",
        author: "Michael Chen",
        location: "San Francisco, CA",
        rating: 5,
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=987&q=80",
    },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Are hot air balloon rides safe?",
        answer: "Yes, hot air ballooning is one of the safest forms of aviation. Our experienced pilots are FAA certified with thousands of flight hours, and our balloons undergo rigorous safety inspections. We also strictly adhere to weather guidelines and will postpone flights if conditions are not optimal for safety.",
    },
    FaqEntry {
        question: "What should I wear for my balloon ride?",
        answer: "Dress in comfortable layers appropriate for the season, as temperatures at higher altitudes can be cooler than on the ground. Wear closed-toe, flat shoes suitable for standing and potentially walking in fields. Avoid loose accessories like scarves that could get caught, and consider bringing a hat and sunglasses.",
    },
    FaqEntry {
        question: "How long does the entire experience last?",
        answer: "The entire experience typically lasts 3-4 hours, which includes check-in, pre-flight briefing, balloon inflation, the flight itself (approximately 60-90 minutes), landing, pack-up, and a celebratory champagne toast. The exact duration may vary based on weather conditions and the specific package you've chosen.",
    },
    FaqEntry {
        question: "What happens if my flight is canceled due to weather?",
        answer: "If we need to cancel your flight due to unsuitable weather conditions, we'll contact you as soon as possible and offer to reschedule your flight for another date. If rescheduling isn't possible, we offer a full refund. Your safety is our top priority, and our experienced pilots make the final decision on weather suitability.",
    },
    FaqEntry {
        question: "Can I bring my camera or phone?",
        answer: "Absolutely! We encourage you to bring cameras or smartphones to capture your experience. We recommend securing them with straps to prevent dropping. Our pilots can suggest the best moments for photos, and some packages include professional photography services as well.",
    },
    FaqEntry {
        question: "Is there an age or health restriction?",
        answer: "Passengers should be at least 6 years old and able to stand for the duration of the flight (typically 60-90 minutes). Anyone with recent surgeries, heart conditions, or who is pregnant should consult their doctor before flying. We can accommodate most passengers, but please inform us of any mobility concerns when booking.",
    },
];

pub static SAFETY_COMMITMENTS: &[&str] = &[
    "FAA-certified pilots with minimum 1,000+ flight hours",
    "Balloons inspected before each flight",
    "Comprehensive weather monitoring systems",
    "Regular equipment maintenance exceeding FAA requirements",
    "Flight insurance for each passenger",
    "Ground crew trained in emergency procedures",
];

pub struct Stat {
    pub value: u32,
    pub suffix: CounterSuffix,
    pub label: &'static str,
}

pub static STATS: &[Stat] = &[
    Stat { value: 5000, suffix: CounterSuffix::Plus, label: "Successful Flights" },
    Stat { value: 100, suffix: CounterSuffix::Percent, label: "Safety Record" },
    Stat { value: 15, suffix: CounterSuffix::KPlus, label: "Happy Customers" },
];

pub static NAV_LABELS: &[&str] = &[
    "Home",
    "Our Story",
    "Experiences",
    "Gallery",
    "Testimonials",
    "FAQ",
    "Contact",
];

/// Section id a navigation label scrolls to: "Our Story" -> "our-story".
pub fn anchor_for(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub static INFORMATION_LINKS: &[&str] = &[
    "Privacy Policy",
    "Terms & Conditions",
    "Flight Insurance",
    "Weather Policy",
    "Gift Certificates",
    "Careers",
];

pub static SOCIAL_LINKS: &[(Glyph, &str)] = &[
    (Glyph::Facebook, "Facebook"),
    (Glyph::Instagram, "Instagram"),
    (Glyph::Twitter, "Twitter"),
    (Glyph::Youtube, "YouTube"),
];

pub const MAX_PARTICIPANTS: u8 = 8;

pub fn participants_label(count: u8) -> String {
    if count == 1 {
        "1 person".to_string()
    } else {
        format!("{} people", count)
    }
}

/// Experience types offered in the booking form, `(value, label)`.
pub static BOOKING_EXPERIENCES: &[(&str, &str)] = &[
    ("sunrise", "Sunrise Adventure"),
    ("private", "Private Charter"),
    ("proposal", "Proposal Package"),
    ("wine", "Premium Wine Tour"),
];

pub struct ContactDetails {
    pub phone: &'static str,
    pub email: &'static str,
    pub address: [&'static str; 2],
    pub hours: [&'static str; 2],
}

pub static CONTACT: ContactDetails = ContactDetails {
    phone: "(555) 123-4567",
    email: "info@skyvoyagerballoons.com",
    address: ["123 Skyway Drive", "Horizon Valley, CA 94123"],
    hours: [
        "Open 7 days a week",
        "Flights depart at sunrise & approx. 2 hrs before sunset",
    ],
};

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1507608616759-54f48f0af0ee?auto=format&fit=crop&w=2340&q=80";
pub const STORY_IMAGE: &str = "https://images.unsplash.com/photo-1486578077620-8a022ddd481f?q=80&w=1974&auto=format&fit=crop";
pub const LAUNCH_MAP_IMAGE: &str = "https://images.unsplash.com/photo-1543269664-76bc3997d9ea?auto=format&fit=crop&w=2340&q=80";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn anchors_are_kebab_case_and_unique() {
        assert_eq!(anchor_for("Our Story"), "our-story");
        assert_eq!(anchor_for("FAQ"), "faq");
        let anchors: HashSet<_> = NAV_LABELS.iter().map(|l| anchor_for(l)).collect();
        assert_eq!(anchors.len(), NAV_LABELS.len());
    }

    #[test]
    fn ratings_never_exceed_five_stars() {
        for testimonial in TESTIMONIALS {
            assert!(testimonial.rating <= MAX_RATING);
            assert_eq!(testimonial.stars().count(), MAX_RATING as usize);
        }
    }

    #[test]
    fn stars_list_filled_before_empty() {
        let t = Testimonial {
            quote: "",
            author: "",
            location: "",
            rating: 3,
            image: "",
        };
        let stars: Vec<bool> = t.stars().collect();
        assert_eq!(stars, vec![true, true, true, false, false]);
    }

    #[test]
    fn participant_labels_pluralize() {
        assert_eq!(participants_label(1), "1 person");
        assert_eq!(participants_label(4), "4 people");
    }

    #[test]
    fn stats_cover_every_suffix() {
        let suffixes: Vec<_> = STATS.iter().map(|s| s.suffix).collect();
        assert_eq!(
            suffixes,
            vec![CounterSuffix::Plus, CounterSuffix::Percent, CounterSuffix::KPlus]
        );
    }

    #[test]
    fn gallery_srcs_are_unique() {
        let srcs: HashSet<_> = GALLERY_IMAGES.iter().map(|i| i.src).collect();
        assert_eq!(srcs.len(), GALLERY_IMAGES.len());
    }
}
