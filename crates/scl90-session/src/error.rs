use scl90_core::models::answer::ItemId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Access(#[from] scl90_access::error::AccessError),

    #[error(transparent)]
    Instrument(#[from] scl90_instruments::error::InstrumentError),

    #[error(transparent)]
    Core(#[from] scl90_core::error::CoreError),

    #[error("storage error: {0}")]
    Storage(#[from] scl90_storage::error::StorageError),

    #[error("item {item} is not on this questionnaire (items 1..={item_count})")]
    UnknownItem { item: ItemId, item_count: ItemId },

    #[error("no finished assessment to report")]
    NoResult,
}
