use crate::domain::model::{InventoryRecord, RecordId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence seam for imported records. Create-only: records are immutable
/// once written, so the port exposes no update or delete.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create(&self, record: InventoryRecord) -> Result<RecordId>;
}
