pub mod participants;
pub mod rankings;
pub mod roster;
pub mod scoring;
pub mod teams;
