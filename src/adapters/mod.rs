// Adapters layer: concrete implementations for external systems.

pub mod store;

pub use store::JsonlStore;
