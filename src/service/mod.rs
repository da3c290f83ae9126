pub mod report;
pub mod roster;
pub mod scheduler;
pub mod tracker;
