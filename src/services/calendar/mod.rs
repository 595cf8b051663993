//! Calendar core: grid generation and event placement.
//! Pure functions shared by every view; no state lives here.

pub mod grid;
pub mod placement;
