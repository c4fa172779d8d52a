//! Command implementations for the calendar CLI

pub mod check;
pub mod database;
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use check::run_check;
pub use serve::run_serve;
