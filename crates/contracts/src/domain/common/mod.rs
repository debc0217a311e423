//! Common types shared by all resolved dimension entities

pub mod link;

// Re-exports
pub use link::{EntityStatus, GeoPoint, ParentLink, UNLINKED};
