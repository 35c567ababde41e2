pub mod importer;
pub mod mapping;

pub use crate::domain::model::{InventoryRecord, RecordId, SeriesStats};
pub use crate::domain::ports::RecordStore;
pub use crate::utils::error::Result;
