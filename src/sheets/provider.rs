use async_trait::async_trait;

use super::error::SourceResult;
use crate::board::RawTables;

/// Trait that every sheet data source must implement.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetch the current grids for every configured tab.
    async fn fetch_tables(&self) -> SourceResult<RawTables>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
