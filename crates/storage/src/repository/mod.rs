pub mod participant;

pub use participant::ParticipantStore;
