//! Copy, image paths and contact details rendered by the home page.
//!
//! Paragraph text marks emphasised runs with `*asterisks*`; see [`emphasis_runs`].

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "About Us", href: "#about" },
    NavLink { label: "Our Projects", href: "#projects" },
    NavLink { label: "The Viyaa Edge", href: "#edge" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Partner With Us", href: "#partner" },
    NavLink { label: "Enquire Now", href: "#contact" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        title: "Project Management Consultancy (PMC)",
        subtitle: "BUILD HASSLEFREE",
        description: "End-to-end oversight to ensure projects are delivered on time, within budget, and to exacting standards. We manage consultants, contractors, timelines, and quality\u{2014}so every detail aligns with the original vision.",
        image: "/pictures/seq1.jpeg",
    },
    Service {
        id: 2,
        title: "Architectural Design",
        subtitle: "FORMED WITH PRECISION",
        description: "Responsive architectural design that balances aesthetics, functionality, and local sensibilities. Each home is thoughtfully planned to enhance light, airflow, privacy, and a strong sense of place.",
        image: "/pictures/seq2.jpeg",
    },
    Service {
        id: 3,
        title: "Interior Design",
        subtitle: "COMPOSED FOR STILLNESS",
        description: "Refined interior solutions that elevate everyday living. From spatial planning to material selection and finishes, our interiors are designed to feel intuitive, timeless, and deeply personal.",
        image: "/pictures/seq3.jpeg",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub location: &'static str,
    pub year: &'static str,
    pub image: &'static str,
    pub specs: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Viyaa Shantam",
        location: "Goa",
        year: "2025",
        image: "/pictures/seq4.jpeg",
        specs: "4 Beds \u{2022} 6 Baths \u{2022} 450m\u{b2}",
    },
    Project {
        id: 2,
        title: "Dune Residence",
        location: "Desert Ridge, Arizona",
        year: "2023",
        image: "https://images.unsplash.com/photo-1518780664697-55e3ad937233?q=80&w=1000&auto=format&fit=crop",
        specs: "3 Beds \u{2022} 4 Baths \u{2022} 320m\u{b2}",
    },
    Project {
        id: 3,
        title: "The Glass Pavilion",
        location: "Beverly Hills, CA",
        year: "2025",
        image: "https://images.unsplash.com/photo-1600596542815-2495db98dada?q=80&w=1000&auto=format&fit=crop",
        specs: "5 Beds \u{2022} 7 Baths \u{2022} 890m\u{b2}",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pillar {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Harmonious Design",
        description: "Architecture that is rooted in its surroundings\u{2014}responding to climate, landscape, and context. Calm, intuitive, and timeless, our designs belong naturally to the place they stand in.",
    },
    Pillar {
        title: "Functional Spaces",
        description: "Spaces planned with clarity and purpose\u{2014}well-proportioned, practical, and naturally comfortable\u{2014}supporting effortless day-to-day living without compromise.",
    },
    Pillar {
        title: "Material Honesty",
        description: "An authentic approach to materials. Concrete is expressed as concrete. Wood is used as wood. Every finish is chosen for its natural character, durability, and timeless appeal\u{2014}never imitation.",
    },
    Pillar {
        title: "Integrity",
        description: "Integrity underpins every stage of our process\u{2014}from land procurement and legal diligence to design development and on-ground execution.",
    },
];

pub const PILLARS_IMAGE: &str = "https://images.unsplash.com/photo-1600566753190-17f0baa2a6c3?q=80&w=1000&auto=format&fit=crop";
pub const PILLARS_QUOTE: &str = "\"True luxury lives at the intersection of nature, thoughtful design, and human connection.\"";

/// Marker overlaid on an image; `top`/`left` are percentages of the image box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hotspot {
    pub top: f32,
    pub left: f32,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const PILLAR_HOTSPOTS: &[Hotspot] = &[
    Hotspot {
        top: 32.0,
        left: 24.0,
        title: "Natural Light",
        detail: "Double-height volumes and deep openings pull daylight through the living spaces.",
    },
    Hotspot {
        top: 58.0,
        left: 62.0,
        title: "Material Honesty",
        detail: "Concrete is expressed as concrete. Wood is used as wood.",
    },
    Hotspot {
        top: 74.0,
        left: 36.0,
        title: "Indoor-Outdoor Living",
        detail: "Living areas open directly onto courtyards and greens.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Founder {
    pub name: &'static str,
    pub portrait: &'static str,
    pub paragraphs: &'static [&'static str],
    /// Portrait column before the note on wide screens.
    pub portrait_first: bool,
}

pub const FOUNDERS: &[Founder] = &[
    Founder {
        name: "Abhishek Das",
        portrait: "/pictures/fufu.jpeg",
        portrait_first: true,
        paragraphs: &[
            "My journey into real estate has been shaped as much by passion as by experience. After spending over sixteen years in the corporate world, I felt a growing pull towards building something more personal and enduring.",
            "Real estate was a natural progression. Over the years, I have personally invested in properties across Goa and the NCR region, and Goa, in particular, has always felt like home. Its old-world charm, warm people, verdant landscapes, and serene coastline continue to inspire me. When I decided to take the entrepreneurial leap, creating meaningful homes in Goa felt instinctive.",
            "This vision found its perfect balance through my wife, Ankita Jain Das, who has led an architectural and interior design consultancy for nearly eighteen years. Our shared appreciation for thoughtful design and well-crafted spaces laid the foundation for *Viyaa Estates*.",
            "*Viyaa*, the brand represents a harmonious connection between *nature*, *space*, and *people*. This philosophy guides everything we do, as we create homes that are aesthetically refined, intelligently designed, and rooted in a genuine sense of place. From land selection to execution and delivery, we maintain uncompromising standards. Every project is developed on *land* with clear legal title and constructed using *high-quality materials* and *trusted brands*.",
        ],
    },
    Founder {
        name: "Ankita Jain Das",
        portrait: "/pictures/buii.jpeg",
        portrait_first: false,
        paragraphs: &[
            "If Abhishek is the mind behind the company, I see myself as its heart. With over eighteen years of experience leading my own architectural and interior design consultancy, I have had the privilege of creating thoughtfully designed spaces for many discerning clients. The opportunity to now design and develop homes of our own\u{2014}spaces that people can truly experience and call their own\u{2014}has been deeply fulfilling.",
            "While my work has spanned a wide range of projects, villa developments have always been especially close to my heart. They offer the freedom to shape spaces from the ground up, allowing design, functionality, and emotion to come together seamlessly.",
            "My aspiration has always been to create homes that are not only aesthetically refined, but also highly functional and Vaastu-compliant. Every Viyaa Estates project is guided by our core pillars\u{2014}*harmonious design*, *functional spaces*, *material honesty*, and *integrity*.",
            "We also recognise that some owners prefer to build their own homes. For such clients, we offer complementary services including *Project Management Consultancy (PMC)*, *architectural design*, and *interior design*\u{2014}providing complete autonomy, flexibility, and peace of mind, without the usual complexities.",
        ],
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Viyaa Estates is the real estate vertical of AJDA. Established in 2010, AJDA (Ankita Jain Design Associates) began as a boutique architectural and interior design consultancy, drawing its name from its founder, Ankita Jain Das.",
    "In 2025, with Abhishek Das joining as a partner, AJDA expanded into real estate development, leading to the creation of Viyaa Estates and the launch of its first project in Goa\u{2014}Viyaa Shantam.",
    "The name Viyaa signifies a connection between *nature*, *space*, and *people*\u{2014}a philosophy that guides our work as we craft spaces through thoughtful, aesthetic, and intelligent design.",
];

pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=800&auto=format&fit=crop";

pub const HERO_TAGLINE: &str = "Spaces envisioned with refined aesthetics and intelligent design, crafted to elevate everyday happiness.";
pub const HERO_CLOSER: &str = "Not built to impress \u{2014} built to endure.";

pub const SERVICES_INTRO: &str = "We understand that some owners prefer to build their own homes. For such clients, we offer additional services that ensure complete autonomy, flexibility, and peace of mind\u{2014}without the usual complexities.";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactDetails {
    pub address_lines: &'static [&'static str],
    pub street: &'static str,
    pub locality: &'static str,
    pub postal_code: &'static str,
    pub country_code: &'static str,
    pub phone: &'static str,
    pub schema_phone: &'static str,
    pub email: &'static str,
    pub hours_lines: &'static [&'static str],
    pub schema_hours: &'static str,
}

pub const CONTACT: ContactDetails = ContactDetails {
    address_lines: &["A106, 3rd Floor, Okhla Phase 2,", "New Delhi - 110020", "India"],
    street: "A106, 3rd Floor, Okhla Phase 2",
    locality: "New Delhi",
    postal_code: "110020",
    country_code: "IN",
    phone: "+91 9810152674",
    schema_phone: "+91-9810955103",
    email: "info@viyaaestates.com",
    hours_lines: &["10:00 am \u{2013} 18:00 pm", "Closed on Tuesdays"],
    schema_hours: "Mo-Sa 10:00-18:00",
};

pub const ENQUIRY_SUBJECT: &str = "Enquiry from viyaaestates.com";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Instagram,
    Facebook,
    LinkedIn,
    YouTube,
    WhatsApp,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialProfile {
    pub network: Network,
    pub label: &'static str,
    pub url: &'static str,
    /// Listed in the structured-data `sameAs` array.
    pub public_profile: bool,
}

pub const SOCIAL_PROFILES: &[SocialProfile] = &[
    SocialProfile {
        network: Network::Instagram,
        label: "Instagram",
        url: "https://www.instagram.com/viyaa_estates/",
        public_profile: true,
    },
    SocialProfile {
        network: Network::Facebook,
        label: "Facebook",
        url: "https://www.facebook.com/people/Viyaa-Estates/61587509340610/",
        public_profile: true,
    },
    SocialProfile {
        network: Network::LinkedIn,
        label: "LinkedIn",
        url: "https://www.linkedin.com/company/viyaa-estates/",
        public_profile: true,
    },
    SocialProfile {
        network: Network::YouTube,
        label: "YouTube",
        url: "https://www.youtube.com/@viyaa_estates",
        public_profile: true,
    },
    SocialProfile {
        network: Network::WhatsApp,
        label: "WhatsApp",
        url: "https://wa.me/919810955103",
        public_profile: false,
    },
];

pub fn enquiry_mailto() -> String {
    format!(
        "mailto:{}?subject={}",
        CONTACT.email,
        urlencoding::encode(ENQUIRY_SUBJECT)
    )
}

/// Splits `text` into `(emphasised, run)` pairs on `*` markers.
///
/// An unterminated marker emphasises the rest of the text. Empty runs are dropped.
pub fn emphasis_runs(text: &str) -> Vec<(bool, &str)> {
    text.split('*')
        .enumerate()
        .filter(|(_, run)| !run.is_empty())
        .map(|(i, run)| (i % 2 == 1, run))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // Ids emitted by the home page sections.
    const SECTION_IDS: &[&str] = &["home", "about", "services", "projects", "edge", "contact", "partner"];

    #[test]
    fn nav_anchors_are_unique_and_point_at_sections() {
        let hrefs: HashSet<_> = NAV_LINKS.iter().map(|link| link.href).collect();
        assert_eq!(hrefs.len(), NAV_LINKS.len());
        for link in NAV_LINKS {
            let id = link.href.trim_start_matches('#');
            assert!(link.href.starts_with('#'), "{} is not an in-page anchor", link.href);
            assert!(SECTION_IDS.contains(&id), "no section with id {}", id);
        }
    }

    #[test]
    fn nav_order_starts_home_ends_enquire() {
        assert_eq!(NAV_LINKS.first().map(|l| l.label), Some("Home"));
        assert_eq!(NAV_LINKS.last().map(|l| l.href), Some("#contact"));
    }

    #[test]
    fn ids_are_unique() {
        let services: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        let projects: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(services.len(), SERVICES.len());
        assert_eq!(projects.len(), PROJECTS.len());
    }

    #[test]
    fn four_pillars() {
        assert_eq!(PILLARS.len(), 4);
    }

    #[test]
    fn hotspots_sit_inside_the_image() {
        for spot in PILLAR_HOTSPOTS {
            assert!((0.0..=100.0).contains(&spot.top));
            assert!((0.0..=100.0).contains(&spot.left));
        }
    }

    #[test]
    fn founders_alternate_portrait_side() {
        assert_eq!(FOUNDERS.len(), 2);
        assert_ne!(FOUNDERS[0].portrait_first, FOUNDERS[1].portrait_first);
    }

    #[test]
    fn emphasis_runs_alternate() {
        let runs = emphasis_runs("between *nature*, *space*, and *people*.");
        assert_eq!(
            runs,
            vec![
                (false, "between "),
                (true, "nature"),
                (false, ", "),
                (true, "space"),
                (false, ", and "),
                (true, "people"),
                (false, "."),
            ]
        );
    }

    #[test]
    fn emphasis_runs_leading_marker_and_plain_text() {
        assert_eq!(emphasis_runs("*Viyaa*, the brand"), vec![(true, "Viyaa"), (false, ", the brand")]);
        assert_eq!(emphasis_runs("no markers"), vec![(false, "no markers")]);
        assert!(emphasis_runs("").is_empty());
    }

    #[test]
    fn content_paragraphs_have_balanced_markers() {
        let all = FOUNDERS
            .iter()
            .flat_map(|f| f.paragraphs.iter())
            .chain(ABOUT_PARAGRAPHS.iter());
        for paragraph in all {
            assert_eq!(paragraph.matches('*').count() % 2, 0, "unbalanced: {}", paragraph);
        }
    }

    #[test]
    fn mailto_encodes_subject() {
        let link = enquiry_mailto();
        assert!(link.starts_with("mailto:info@viyaaestates.com?subject="));
        assert!(!link.contains(' '));
        assert!(link.contains("Enquiry%20from%20viyaaestates.com"));
    }

    #[test]
    fn whatsapp_is_not_a_public_profile() {
        let public: Vec<_> = SOCIAL_PROFILES.iter().filter(|p| p.public_profile).collect();
        assert_eq!(public.len(), 4);
        assert!(public.iter().all(|p| p.network != Network::WhatsApp));
    }
}
