//! Route handlers organized by resource

pub mod assets;
pub mod date;
pub mod health;
pub mod month;
pub mod stats;
