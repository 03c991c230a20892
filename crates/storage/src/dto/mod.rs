pub mod common;
pub mod participant;
pub mod ranking;
pub mod scoring;
pub mod team;
