pub mod category;
pub mod distance;
pub mod participant;
pub mod race_result;

pub use category::{Category, Gender};
pub use distance::Distance;
pub use participant::Participant;
pub use race_result::RaceResult;
