pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::JsonlStore;
pub use config::{CliConfig, ImportConfig};
pub use core::importer::Importer;
pub use domain::model::{InventoryRecord, RecordId, SeriesStats};
pub use domain::ports::RecordStore;
pub use utils::error::{ImportError, Result};
