use scl90_core::models::answer::ItemId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    /// The factor table does not partition the item range. Only a broken
    /// configuration can produce this.
    #[error("invalid instrument configuration: {0}")]
    InvalidInput(String),

    #[error("{missing} item(s) unanswered, starting at item {first_unanswered}")]
    Incomplete {
        first_unanswered: ItemId,
        missing: usize,
    },
}
