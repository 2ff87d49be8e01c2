//! # Static Marketing Content
//!
//! Fixed copy rendered into the home page: the service offerings, the list of
//! areas served and the current availability notice. Kept out of the HTML
//! renderer so the copy can be read and edited in one place.

/// One service offering card.
#[derive(Debug)]
pub struct ServiceOffering {
    /// Glyph shown at the top of the card.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// The three service offerings, in display order.
pub const SERVICE_OFFERINGS: [ServiceOffering; 3] = [
    ServiceOffering {
        icon: "✦",
        title: "Premium Home Cleaning",
        description: "Transform your home with our professional cleaning service. We use \
            premium products and techniques to ensure every corner sparkles.",
        features: &[
            "5* Hotel Level cleaning services",
            "Everything has a place, just let us know!",
            "Dusting, vacuuming & mopping of all areas",
            "Premium grade professional products",
            "Flexible scheduling & Holiday return cleans",
        ],
    },
    ServiceOffering {
        icon: "👕",
        title: "In-House Ironing, Laundry & Pet Care",
        description: "Combined with an in home clean we can offer in home Ironing, Laundry \
            and help with your pets.",
        features: &[
            "Professional in home ironing with our equipment",
            "Loading / Unloading of your laundry ready for your return",
            "Laundry hung out to dry during dry days",
            "Feeding pets",
            "Cleaning cat litter trays / pet areas",
        ],
    },
    ServiceOffering {
        icon: "🏢",
        title: "Office & Commercial Cleans",
        description: "Efficient office cleans suited to your companys schedule. Including \
            unsociable hours so we do not get in your way.",
        features: &[
            "Fully customised regular cleans for your business",
            "One off moving out/in deep cleans",
            "Computer equipment cleaning",
            "Early Morning, Late evening & weekends also avaliable",
        ],
    },
];

/// Areas served, in display order.
pub const SERVICE_AREAS: [&str; 8] = [
    "Upminster",
    "Basildon",
    "Benfleet",
    "Rayleigh",
    "Southend",
    "Wickford",
    "Leigh On-Sea",
    "Brentwood",
];

/// Current availability notice shown in the hero section.
pub struct AvailabilityNotice {
    pub title: &'static str,
    pub message: &'static str,
}

pub const AVAILABILITY_NOTICE: AvailabilityNotice = AvailabilityNotice {
    title: "Availability Update",
    message: "We currently have no avalibility for regular cleans until the beginning of \
        Feburary 2026. We are currently offering appointments to discuss these openings now.",
};

/// Why-choose-us highlights, in display order.
pub const HIGHLIGHTS: [(&str, &str); 4] = [
    ("Quality Guaranteed", "100% satisfaction or we'll make it right"),
    ("Premium Products", "Professional-grade supplies"),
    ("Expert Team", "Trained and vetted professionals"),
    ("Half Price Trial Clean", "First regular clean 50% off"),
];
