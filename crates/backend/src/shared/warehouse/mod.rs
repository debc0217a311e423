pub mod client;
pub mod rows;

// Re-exports
pub use client::{DimensionSource, WarehouseClient, WarehouseError};
