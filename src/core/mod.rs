// LogWise - core/mod.rs
//
// Core filtering logic. Pure and synchronous: one value per filtering
// invocation, no I/O, no shared mutable state, no wall-clock reads (the
// current time is injected by the caller where needed).

pub mod analysis;
pub mod grammar;
pub mod index;
pub mod model;
pub mod offset;
pub mod parser;
pub mod session;
pub mod window;
pub mod year;
