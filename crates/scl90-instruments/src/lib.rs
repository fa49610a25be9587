//! scl90-instruments
//!
//! Instrument definitions and the scoring engine. Pure computation, no
//! storage. Defines the factor table of each supported inventory, validates
//! it once into a [`config::Questionnaire`], and maps answer sets to
//! factor-level and overall results.

pub mod config;
pub mod error;
pub mod instruments;
pub mod levels;
pub mod scoring;

use config::{Factor, Questionnaire, ResponseOption};
use error::InstrumentError;
use scl90_core::models::answer::ItemId;

/// Trait implemented by each self-report inventory.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g., "scl90").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "SCL-90").
    fn name(&self) -> &str;

    /// Items are numbered `1..=item_count`.
    fn item_count(&self) -> ItemId;

    /// The factor table, in display order.
    fn factors(&self) -> &[Factor];

    /// The answer scale shown for every item.
    fn response_options(&self) -> &[ResponseOption];

    /// Validate the factor table and build a questionnaire from it.
    fn load(&self) -> Result<Questionnaire, InstrumentError> {
        Questionnaire::new(self.factors().to_vec(), self.item_count())
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::scl90::Scl90)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Look up an instrument by ID and validate its configuration.
pub fn load_instrument(id: &str) -> Result<Questionnaire, InstrumentError> {
    get_instrument(id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))?
        .load()
}
