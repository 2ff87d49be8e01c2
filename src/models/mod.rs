mod brand;
mod contact;
mod content;
mod pricing;
mod state;

pub use brand::{Brand, BrandConfig};
pub use contact::ContactSubmission;
pub use content::{AVAILABILITY_NOTICE, HIGHLIGHTS, SERVICE_AREAS, SERVICE_OFFERINGS, ServiceOffering};
pub use pricing::{PRICING_BLOCKS, PricingBlock, RoomIcon, RoomItem, SessionDetail, session_detail};
pub use state::AppState;
