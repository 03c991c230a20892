pub mod error;
pub mod roster;

pub use error::{ImporterError, Result};
pub use roster::{
    models::{FORMAT_VERSION, RosterFile, RosterParticipant, RosterResult},
    transformer::RosterTransformer,
    validator::{RosterValidator, ValidationReport},
};
