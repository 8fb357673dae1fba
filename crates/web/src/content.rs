// =============================================================================
// GS-IT Web - Static Site Content
// =============================================================================
// Table of Contents:
// 1. Navigation
// 2. Home
// 3. Services & Process
// 4. Audio-Video Solutions
// 5. Brand Partners
// 6. Clients
// =============================================================================

use crate::routes::Route;

// -----------------------------------------------------------------------------
// 1. Navigation
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub route: Route,
}

pub const MENU_ITEMS: [MenuItem; 6] = [
    MenuItem { title: "Home", route: Route::Home },
    MenuItem { title: "Audio & Video", route: Route::AudioVideo },
    MenuItem { title: "Service", route: Route::Service },
    MenuItem { title: "Clients", route: Route::Clients },
    MenuItem { title: "About", route: Route::About },
    MenuItem { title: "Contact", route: Route::Contact },
];

// -----------------------------------------------------------------------------
// 2. Home
// -----------------------------------------------------------------------------

/// Headline number with its unit, e.g. 98 + "%".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: 98, suffix: "%", label: "Success Rate" },
    Stat { value: 24, suffix: "/7", label: "Support" },
    Stat { value: 100, suffix: "+", label: "Countries" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_FEATURES: [Feature; 4] = [
    Feature {
        icon: "🎛️",
        title: "End-to-End Integration",
        description: "Consulting, design, programming, installation and support from one team.",
    },
    Feature {
        icon: "📹",
        title: "Surveillance & Security",
        description: "Certified Hikvision, Dahua and Uniview deployments for sites of any size.",
    },
    Feature {
        icon: "🖥️",
        title: "Meeting Spaces",
        description: "Huddle rooms to boardrooms with one-touch conferencing.",
    },
    Feature {
        icon: "🛠️",
        title: "Managed Support",
        description: "Preventive maintenance and round-the-clock response contracts.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub title: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub author: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
}

pub const BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "Planning a Hybrid Boardroom",
        category: "Meeting Rooms",
        date: "Mar 15, 2024",
        author: "Sarah Parker",
        summary: "Camera placement, microphone coverage and display sizing for hybrid meetings.",
        image: "/assets/img/blog/boardroom.jpg",
    },
    BlogPost {
        title: "Scaling CCTV Across Multiple Sites",
        category: "Surveillance",
        date: "Mar 12, 2024",
        author: "Mike Ross",
        summary: "Centralised NVR management and bandwidth planning for distributed estates.",
        image: "/assets/img/blog/cctv.jpg",
    },
    BlogPost {
        title: "Designing Smart Classrooms",
        category: "Education",
        date: "Mar 10, 2024",
        author: "Emma Wilson",
        summary: "Interactive displays and lecture capture that teachers actually use.",
        image: "/assets/img/blog/classroom.jpg",
    },
];

/// Home page newsletter block. Sign-ups go through the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Newsletter {
    pub title: &'static str,
    pub text: &'static str,
    pub action: &'static str,
    pub route: Route,
}

pub const NEWSLETTER: Newsletter = Newsletter {
    title: "Subscribe to our newsletter",
    text: "Project stories, product launches from our partners and maintenance tips, a few times a year.",
    action: "Sign Me Up",
    route: Route::Contact,
};

// -----------------------------------------------------------------------------
// 3. Services & Process
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceOffering {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: [ServiceOffering; 4] = [
    ServiceOffering {
        icon: "🔊",
        title: "Audio Systems",
        description: "Background music, public address and conference audio.",
        features: &["Ceiling & Line Arrays", "DSP Tuning", "Paging Zones", "Voice Evacuation"],
    },
    ServiceOffering {
        icon: "📺",
        title: "Video & Display",
        description: "Video walls, LED screens and signage networks.",
        features: &["Video Walls", "LED Displays", "Digital Signage", "Matrix Switching"],
    },
    ServiceOffering {
        icon: "📷",
        title: "Security & CCTV",
        description: "IP surveillance with analytics and remote monitoring.",
        features: &["IP Cameras", "NVR Storage", "Access Control", "Video Analytics"],
    },
    ServiceOffering {
        icon: "🌐",
        title: "Networking",
        description: "Structured cabling and networks built for AV traffic.",
        features: &["Structured Cabling", "PoE Switching", "Wi-Fi", "AV over IP"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        icon: "🔍",
        title: "Discovery",
        description: "We survey the site and learn how each space is actually used.",
    },
    ProcessStep {
        icon: "📋",
        title: "Design",
        description: "Drawings, bills of material and a budget you can sign off on.",
    },
    ProcessStep {
        icon: "⚙️",
        title: "Installation",
        description: "Certified engineers install, program and commission every system.",
    },
    ProcessStep {
        icon: "🚀",
        title: "Handover",
        description: "Training, documentation and a support plan from day one.",
    },
];

pub const SERVICE_STATS: [Stat; 4] = [
    Stat { value: 500, suffix: "+", label: "Projects Completed" },
    Stat { value: 100, suffix: "+", label: "Happy Clients" },
    Stat { value: 10, suffix: "+", label: "Years Experience" },
    Stat { value: 24, suffix: "/7", label: "Support Available" },
];

// -----------------------------------------------------------------------------
// 4. Audio-Video Solutions
// -----------------------------------------------------------------------------

pub const AV_SERVICES: [Feature; 5] = [
    Feature {
        icon: "🎧",
        title: "AV Consulting Services",
        description: "Assessment of client requirements to improve existing audio-video technology.",
    },
    Feature {
        icon: "📐",
        title: "AV Design Services",
        description: "Customised designs that perform well and blend into the client's infrastructure.",
    },
    Feature {
        icon: "💻",
        title: "AV Programming",
        description: "Control systems and intuitive interfaces for easy operation.",
    },
    Feature {
        icon: "🔧",
        title: "AV Installation & Integration",
        description: "Professional installation with regulatory compliance.",
    },
    Feature {
        icon: "⚙️",
        title: "AV Support & Maintenance",
        description: "Ongoing support that keeps every system performing.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solution {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const AV_SOLUTIONS: [Solution; 4] = [
    Solution {
        title: "Meeting Room Solutions",
        description: "Collaboration in rooms of all sizes with one product suite.",
        image: "/assets/img/solutions/meeting-room.jpg",
    },
    Solution {
        title: "Smart Classroom Solutions",
        description: "Interactive teaching spaces with lecture capture and wireless sharing.",
        image: "/assets/img/solutions/smart-classroom.jpg",
    },
    Solution {
        title: "Auditorium Solutions",
        description: "Sound reinforcement, projection and stage lighting for large venues.",
        image: "/assets/img/solutions/auditorium.jpg",
    },
    Solution {
        title: "Video Wall Solutions",
        description: "Seamless LCD and LED walls for control rooms and lobbies.",
        image: "/assets/img/solutions/video-wall.jpg",
    },
];

// -----------------------------------------------------------------------------
// 5. Brand Partners
// -----------------------------------------------------------------------------

/// Copy for a manufacturer page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrandProfile {
    pub route: Route,
    pub name: &'static str,
    pub tagline: &'static str,
    pub about: &'static [&'static str],
    pub logo: &'static str,
    pub products: &'static [Feature],
}

pub const HIKVISION: BrandProfile = BrandProfile {
    route: Route::Hikvision,
    name: "Hikvision",
    tagline: "AIoT security solutions",
    about: &[
        "Hikvision serves a wide range of industries with machine perception, artificial intelligence and big data technologies.",
        "As an authorised partner we supply, install and maintain the full Hikvision range across the UAE.",
    ],
    logo: "/assets/img/hikvision.jpg",
    products: &[
        Feature { icon: "📷", title: "Network Cameras", description: "DeepinView and ColorVu cameras for every lighting condition." },
        Feature { icon: "💾", title: "NVRs", description: "Recorders with AcuSense filtering and RAID storage." },
        Feature { icon: "🚪", title: "Access Control", description: "Face recognition terminals and turnstiles." },
    ],
};

pub const DAHUA: BrandProfile = BrandProfile {
    route: Route::Dahua,
    name: "Dahua",
    tagline: "Video-centric smart IoT",
    about: &[
        "Dahua Technology provides video-centric AIoT solutions for cities, enterprises and consumers.",
        "We design Dahua systems from single-site retail to multi-building campuses.",
    ],
    logo: "/assets/img/dahua.png",
    products: &[
        Feature { icon: "📷", title: "WizSense Cameras", description: "Edge AI for perimeter protection and people counting." },
        Feature { icon: "🖥️", title: "Video Walls", description: "Narrow-bezel displays and decoders for control rooms." },
        Feature { icon: "🔔", title: "Intercom", description: "IP video intercom for villas and towers." },
    ],
};

pub const UNV: BrandProfile = BrandProfile {
    route: Route::Unv,
    name: "Uniview",
    tagline: "Professional IP video surveillance",
    about: &[
        "Uniview pioneered IP video surveillance and delivers cameras, storage and management platforms.",
        "Our engineers deploy Uniview for hospitality, education and government clients.",
    ],
    logo: "/assets/img/unv.png",
    products: &[
        Feature { icon: "📷", title: "IP Cameras", description: "LightHunter low-light imaging and smart intrusion prevention." },
        Feature { icon: "💾", title: "NVR & Storage", description: "Ultra 265 compression to cut storage costs." },
        Feature { icon: "📱", title: "EZView", description: "Mobile live view and playback from anywhere." },
    ],
};

pub const BRANDS: [BrandProfile; 3] = [UNV, HIKVISION, DAHUA];

// -----------------------------------------------------------------------------
// 6. Clients
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub client: &'static str,
    pub sector: &'static str,
    pub quote: &'static str,
    pub person: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        client: "Marina Hospitality Group",
        sector: "Hospitality",
        quote: "Ballroom AV and guest-room signage delivered ahead of our opening date.",
        person: "Ahmed Al Mansoori",
    },
    Testimonial {
        client: "Gulf Academy",
        sector: "Education",
        quote: "Forty smart classrooms converted over one summer break without a single missed deadline.",
        person: "Priya Nair",
    },
    Testimonial {
        client: "Desert Logistics",
        sector: "Industrial",
        quote: "Warehouse CCTV now covers every dock, and the support team answers at 3 a.m.",
        person: "James Carter",
    },
];

pub const CLIENT_SECTORS: [&str; 6] = [
    "Hospitality",
    "Education",
    "Healthcare",
    "Retail",
    "Government",
    "Industrial",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_routes_are_distinct_and_real() {
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            assert_ne!(item.route, Route::NotFound);
            assert!(MENU_ITEMS[i + 1..].iter().all(|other| other.route != item.route));
        }
    }

    #[test]
    fn test_newsletter_signup_goes_to_contact() {
        assert_eq!(NEWSLETTER.route, Route::Contact);
        assert!(NEWSLETTER.title.to_lowercase().contains("newsletter"));
    }

    #[test]
    fn test_brand_pages_point_at_brand_routes() {
        let routes: Vec<Route> = BRANDS.iter().map(|b| b.route).collect();
        assert!(routes.contains(&Route::Hikvision));
        assert!(routes.contains(&Route::Dahua));
        assert!(routes.contains(&Route::Unv));
    }
}
