pub mod job;
pub mod region;
