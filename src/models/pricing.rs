//! # Pricing Blocks and Session Details
//!
//! Prices are quoted in fixed blocks of time. Each block carries a price and
//! an implied hourly rate, plus a detail table (description and included
//! room/service list) shown when the visitor selects the block. All of it is
//! static configuration; which block is currently selected is purely
//! browser-side state.

/// One priced block of cleaning time.
#[derive(Debug, PartialEq, Eq)]
pub struct PricingBlock {
    pub label: &'static str,
    pub price: &'static str,
    pub per_hour: &'static str,
}

/// Icon kinds used in the session detail room lists.
///
/// Rendered as the matching glyph in the page; the variant names mirror the
/// icon set the detail dialogs use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomIcon {
    Bed,
    Bath,
    Kitchen,
    Sofa,
    Laundry,
}

/// A single room or service line in a session detail table.
#[derive(Debug, PartialEq, Eq)]
pub struct RoomItem {
    pub icon: RoomIcon,
    pub label: &'static str,
}

/// Detail view contents for one pricing block, keyed by its label.
#[derive(Debug, PartialEq, Eq)]
pub struct SessionDetail {
    pub label: &'static str,
    pub description: &'static str,
    pub rooms: &'static [RoomItem],
}

/// The five pricing blocks, in display order.
pub const PRICING_BLOCKS: [PricingBlock; 5] = [
    PricingBlock {
        label: "2 Hour Session",
        price: "£45.00",
        per_hour: "£22.50",
    },
    PricingBlock {
        label: "2.5 Hour Session",
        price: "£55.00",
        per_hour: "£22.00",
    },
    PricingBlock {
        label: "3 Hour Session",
        price: "£65.00",
        per_hour: "£21.60",
    },
    PricingBlock {
        label: "4 Hour Session",
        price: "£85.00",
        per_hour: "£21.25",
    },
    PricingBlock {
        label: "5 Hour Session",
        price: "£100.00",
        per_hour: "£20.00",
    },
];

const SESSION_DETAILS: [SessionDetail; 5] = [
    SessionDetail {
        label: "2 Hour Session",
        description: "Perfect for smaller homes or regular maintenance cleans",
        rooms: &[
            RoomItem {
                icon: RoomIcon::Bed,
                label: "2 Bedrooms",
            },
            RoomItem {
                icon: RoomIcon::Bath,
                label: "1 Bathroom",
            },
            RoomItem {
                icon: RoomIcon::Kitchen,
                label: "1 Kitchen",
            },
            RoomItem {
                icon: RoomIcon::Sofa,
                label: "1 Living Room",
            },
        ],
    },
    SessionDetail {
        label: "2.5 Hour Session",
        description: "Ideal for adding laundry services to your clean",
        rooms: &[
            RoomItem {
                icon: RoomIcon::Bed,
                label: "2 Bedrooms",
            },
            RoomItem {
                icon: RoomIcon::Bath,
                label: "1 Bathroom",
            },
            RoomItem {
                icon: RoomIcon::Kitchen,
                label: "1 Kitchen",
            },
            RoomItem {
                icon: RoomIcon::Sofa,
                label: "1 Living Room",
            },
            RoomItem {
                icon: RoomIcon::Laundry,
                label: "Laundry Hung Out / Put Into Machine",
            },
        ],
    },
    SessionDetail {
        label: "3 Hour Session",
        description: "Great for larger homes with multiple bedrooms and bathrooms",
        rooms: &[
            RoomItem {
                icon: RoomIcon::Bed,
                label: "3 Bedrooms",
            },
            RoomItem {
                icon: RoomIcon::Bath,
                label: "2 Bathrooms",
            },
            RoomItem {
                icon: RoomIcon::Kitchen,
                label: "1 Kitchen",
            },
            RoomItem {
                icon: RoomIcon::Sofa,
                label: "1 Living Room",
            },
        ],
    },
    SessionDetail {
        label: "4 Hour Session",
        description: "Comprehensive clean with ironing or for larger properties",
        rooms: &[
            RoomItem {
                icon: RoomIcon::Bed,
                label: "3-4 Bedrooms",
            },
            RoomItem {
                icon: RoomIcon::Bath,
                label: "2-3 Bathrooms",
            },
            RoomItem {
                icon: RoomIcon::Kitchen,
                label: "1 Kitchen",
            },
            RoomItem {
                icon: RoomIcon::Sofa,
                label: "1 Living Room",
            },
            RoomItem {
                icon: RoomIcon::Laundry,
                label: "In-House Ironing (optional)",
            },
        ],
    },
    SessionDetail {
        label: "5 Hour Session",
        description: "Full service for larger homes including in-house ironing",
        rooms: &[
            RoomItem {
                icon: RoomIcon::Bed,
                label: "4 Bedrooms",
            },
            RoomItem {
                icon: RoomIcon::Bath,
                label: "3 Bathrooms",
            },
            RoomItem {
                icon: RoomIcon::Kitchen,
                label: "1 Kitchen",
            },
            RoomItem {
                icon: RoomIcon::Sofa,
                label: "1 Living Room",
            },
            RoomItem {
                icon: RoomIcon::Laundry,
                label: "In-House Ironing",
            },
        ],
    },
];

/// Looks up the detail table for a pricing block by its label.
pub fn session_detail(label: &str) -> Option<&'static SessionDetail> {
    SESSION_DETAILS.iter().find(|detail| detail.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pricing_block_has_a_detail_table() {
        for block in &PRICING_BLOCKS {
            let detail = session_detail(block.label);
            assert!(detail.is_some(), "no detail table for {}", block.label);
        }
    }

    #[test]
    fn three_hour_session_rooms_match_fixed_table() {
        let detail = session_detail("3 Hour Session").unwrap();
        let labels: Vec<_> = detail.rooms.iter().map(|room| room.label).collect();
        assert_eq!(
            labels,
            ["3 Bedrooms", "2 Bathrooms", "1 Kitchen", "1 Living Room"]
        );
    }

    #[test]
    fn unknown_label_has_no_detail_table() {
        assert!(session_detail("6 Hour Session").is_none());
    }

    #[test]
    fn detail_lookups_are_independent() {
        // Looking up one block never affects what another block returns.
        let five = session_detail("5 Hour Session").unwrap();
        let two = session_detail("2 Hour Session").unwrap();
        assert_eq!(five.rooms.len(), 5);
        assert_eq!(two.rooms.len(), 4);
        assert_eq!(
            session_detail("5 Hour Session").unwrap().rooms.len(),
            5
        );
    }
}
