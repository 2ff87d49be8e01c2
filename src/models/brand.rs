//! # Brand Configuration
//!
//! The same deployment serves the site under more than one domain, each with
//! its own display name, contact address and page metadata. This module holds
//! the closed set of brand variants and the ordered resolution rule that picks
//! one per request: explicit `?site=` override first, then hostname substring
//! match, then the default brand.

/// Closed set of brands this deployment can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    SiobhansLuxe,
    SouthendCleaner,
}

/// Display text and contact details for one brand.
///
/// Computed once per page render and never mutated afterwards; all fields
/// feed directly into the rendered page and its head metadata.
#[derive(Debug, PartialEq, Eq)]
pub struct BrandConfig {
    pub brand_name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
}

const SIOBHANS_LUXE: BrandConfig = BrandConfig {
    brand_name: "Siobhans Luxe",
    title: "Luxury Home Cleaning & Ironing Services in South East Essex",
    email: "hello@siobhansluxe.co.uk",
    description: "Luxury home cleaning & in-house ironing across South Essex. \
        Serving Brentwood, Benfleet, Rayleigh, Canvey Island, Southend & more. \
        First clean 50% off.",
    keywords: "luxury cleaning Essex, ironing service Essex, maid service Southend, \
        house cleaning Basildon, domestic cleaner Benfleet, home cleaning Rayleigh, \
        professional cleaner Wickford, cleaning service Leigh-on-Sea, office cleaning Essex",
};

const SOUTHEND_CLEANER: BrandConfig = BrandConfig {
    brand_name: "Southend Cleaner",
    title: "Southend Cleaner",
    email: "hello@southendcleaner.co.uk",
    description: "Premium cleaning services in Southend and surrounding areas.",
    keywords: "Southend cleaner, cleaning services Southend, luxury cleaning Southend",
};

impl Brand {
    /// Matches an explicit `?site=` override against known short names.
    fn from_site_param(param: &str) -> Option<Self> {
        match param {
            "southend" => Some(Self::SouthendCleaner),
            _ => None,
        }
    }

    /// Matches a request hostname against known domain substrings.
    fn from_hostname(hostname: &str) -> Option<Self> {
        if hostname.contains("southendcleaner.co.uk") {
            Some(Self::SouthendCleaner)
        } else if hostname.contains("siobhansluxe.co.uk") {
            Some(Self::SiobhansLuxe)
        } else {
            None
        }
    }

    /// Resolves the brand for a request.
    ///
    /// The override parameter wins over the hostname; an unrecognized
    /// hostname and no override resolve to the default brand. Pure lookup,
    /// no side effects.
    pub fn resolve(hostname: &str, site_param: Option<&str>) -> Self {
        site_param
            .and_then(Self::from_site_param)
            .or_else(|| Self::from_hostname(hostname))
            .unwrap_or(Self::SiobhansLuxe)
    }

    /// Returns the static configuration for this brand.
    pub fn config(self) -> &'static BrandConfig {
        match self {
            Self::SiobhansLuxe => &SIOBHANS_LUXE,
            Self::SouthendCleaner => &SOUTHEND_CLEANER,
        }
    }
}
